//! Curated bilingual word bank
//!
//! Ten themed categories per language. Category order is fixed: block `b`
//! draws its words from `Category::ALL[b % 10]`, so reordering the table
//! changes every generated level.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Theme of a block's word pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nature,
    Animals,
    Food,
    Human,
    Home,
    City,
    Fashion,
    Tech,
    Travel,
    Science,
}

impl Category {
    /// Categories in block order
    pub const ALL: [Category; 10] = [
        Category::Nature,
        Category::Animals,
        Category::Food,
        Category::Human,
        Category::Home,
        Category::City,
        Category::Fashion,
        Category::Tech,
        Category::Travel,
        Category::Science,
    ];

    /// Category used by the block at `block_index`
    pub fn for_block(block_index: u32) -> Self {
        Self::ALL[block_index as usize % Self::ALL.len()]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
    }

    /// Stable lowercase key
    pub fn key(&self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Animals => "animals",
            Category::Food => "food",
            Category::Human => "human",
            Category::Home => "home",
            Category::City => "city",
            Category::Fashion => "fashion",
            Category::Tech => "tech",
            Category::Travel => "travel",
            Category::Science => "science",
        }
    }

    /// Localized display name, used as the level title
    pub fn name(&self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::En, Category::Nature) => "Nature",
            (Language::En, Category::Animals) => "Animals",
            (Language::En, Category::Food) => "Food",
            (Language::En, Category::Human) => "Human",
            (Language::En, Category::Home) => "Home",
            (Language::En, Category::City) => "City",
            (Language::En, Category::Fashion) => "Fashion",
            (Language::En, Category::Tech) => "Tech",
            (Language::En, Category::Travel) => "Travel",
            (Language::En, Category::Science) => "Science",
            (Language::Es, Category::Nature) => "Naturaleza",
            (Language::Es, Category::Animals) => "Animales",
            (Language::Es, Category::Food) => "Comida",
            (Language::Es, Category::Human) => "Humano",
            (Language::Es, Category::Home) => "Hogar",
            (Language::Es, Category::City) => "Ciudad",
            (Language::Es, Category::Fashion) => "Moda",
            (Language::Es, Category::Tech) => "Tecnología",
            (Language::Es, Category::Travel) => "Viajes",
            (Language::Es, Category::Science) => "Ciencia",
        }
    }

    /// Full word list for this category, in bank order
    pub fn words(&self, lang: Language) -> &'static [&'static str] {
        match (lang, self) {
            (Language::En, Category::Nature) => EN_NATURE,
            (Language::En, Category::Animals) => EN_ANIMALS,
            (Language::En, Category::Food) => EN_FOOD,
            (Language::En, Category::Human) => EN_HUMAN,
            (Language::En, Category::Home) => EN_HOME,
            (Language::En, Category::City) => EN_CITY,
            (Language::En, Category::Fashion) => EN_FASHION,
            (Language::En, Category::Tech) => EN_TECH,
            (Language::En, Category::Travel) => EN_TRAVEL,
            (Language::En, Category::Science) => EN_SCIENCE,
            (Language::Es, Category::Nature) => ES_NATURE,
            (Language::Es, Category::Animals) => ES_ANIMALS,
            (Language::Es, Category::Food) => ES_FOOD,
            (Language::Es, Category::Human) => ES_HUMAN,
            (Language::Es, Category::Home) => ES_HOME,
            (Language::Es, Category::City) => ES_CITY,
            (Language::Es, Category::Fashion) => ES_FASHION,
            (Language::Es, Category::Tech) => ES_TECH,
            (Language::Es, Category::Travel) => ES_TRAVEL,
            (Language::Es, Category::Science) => ES_SCIENCE,
        }
    }

    /// Words that fit a `grid_size` grid and use only `A-Z`, in bank order
    pub fn pool(&self, lang: Language, grid_size: usize) -> Vec<&'static str> {
        self.words(lang)
            .iter()
            .copied()
            .filter(|w| is_grid_word(w) && w.len() <= grid_size)
            .collect()
    }
}

/// Whether `word` can be spelled with grid letters
pub fn is_grid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Cyclic world names, one per block
pub fn world_names(lang: Language) -> &'static [&'static str; 20] {
    match lang {
        Language::En => &EN_WORLD_NAMES,
        Language::Es => &ES_WORLD_NAMES,
    }
}

/// Localized trophy suffix ("The Green Forest Master")
pub fn master_title(lang: Language) -> &'static str {
    match lang {
        Language::En => "Master",
        Language::Es => "Maestro",
    }
}

const EN_WORLD_NAMES: [&str; 20] = [
    "The Green Forest",
    "Animal Kingdom",
    "Tasty Treats",
    "Humanity",
    "Cozy Home",
    "Urban Jungle",
    "Fashion Week",
    "Cyber Future",
    "World Traveler",
    "Science Lab",
    "Mystic Woods",
    "Wild Safari",
    "Gourmet Chef",
    "Body & Mind",
    "Dream House",
    "Metro City",
    "Style Icon",
    "High Tech",
    "Globetrotter",
    "Rocket Science",
];

const ES_WORLD_NAMES: [&str; 20] = [
    "Bosque Verde",
    "Reino Animal",
    "Dulces Placeres",
    "Humanidad",
    "Hogar Dulce Hogar",
    "Jungla Urbana",
    "Semana de Moda",
    "Futuro Cibernético",
    "Viajero Mundial",
    "Laboratorio",
    "Bosque Místico",
    "Safari Salvaje",
    "Chef Gourmet",
    "Cuerpo y Mente",
    "Casa Soñada",
    "Metrópolis",
    "Icono de Estilo",
    "Alta Tecnología",
    "Trotamundos",
    "Ciencia Espacial",
];

const EN_NATURE: &[&str] = &[
    "IVY", "OAK", "MUD", "DEW", "FOG", "SUN", "SKY", "BAY", "BOG", "BUD", "ELM", "FIR", "GUM",
    "HAY", "HOP", "TREE", "LEAF", "ROOT", "BARK", "STEM", "SEED", "MOSS", "FERN", "BUSH", "VINE",
    "PALM", "PINE", "POND", "LAKE", "WAVE", "TIDE", "REEF", "COVE", "PEAK", "HILL", "VALE", "GLEN",
    "ROCK", "SAND", "SOIL", "CLAY", "RAIN", "SNOW", "HAIL", "MIST", "WIND", "GALE", "MOON", "STAR",
    "DUSK", "DAWN", "NOON", "FOAM", "WEED", "TWIG", "CRAG", "DELL", "CLIFF", "BROOK", "CREEK",
    "MARSH", "FIELD", "GROVE", "HEDGE", "FROST", "FLOOD", "SLOPE", "TRAIL", "PETAL", "BLOOM",
    "SHORE", "BEACH", "OCEAN", "BRUSH", "CEDAR", "BIRCH", "MAPLE", "WHEAT", "PLAIN", "RIDGE",
    "STREAM", "FOREST", "DESERT", "CANYON", "ISLAND", "MEADOW", "FLOWER", "BRANCH", "PEBBLE",
    "BREEZE", "VALLEY", "JUNGLE", "GARDEN", "LAGOON", "TUNDRA", "LICHEN", "SPROUT", "CANOPY",
    "GLACIER", "BLOSSOM", "CASCADE", "CURRENT", "TERRACE", "PLATEAU", "THICKET", "ORCHARD",
    "PASTURE", "PRAIRIE", "MONSOON", "COASTAL", "SAVANNA", "MOUNTAIN", "WOODLAND", "SEASHORE",
    "WILDFIRE", "SNOWFALL", "SUNLIGHT", "FOOTHILL", "LAKESIDE", "MUDSLIDE", "RAINFALL", "SANDBANK",
    "TREETOPS", "ROSEBUSH",
];

const EN_ANIMALS: &[&str] = &[
    "CAT", "DOG", "BAT", "RAT", "FOX", "OWL", "COW", "PIG", "HEN", "ANT", "BEE", "EEL", "EMU",
    "GNU", "RAM", "WOLF", "BEAR", "LION", "DEER", "HARE", "HAWK", "DOVE", "CROW", "SWAN", "DUCK",
    "FROG", "TOAD", "NEWT", "CRAB", "CLAM", "SEAL", "FISH", "BIRD", "WORM", "SLUG", "MOTH", "WASP",
    "FLEA", "TICK", "MITE", "BULL", "CALF", "LAMB", "GOAT", "PONY", "MULE", "MINK", "LYNX", "IBIS",
    "WREN", "LARK", "MOLE", "BOAR", "TIGER", "MOOSE", "WHALE", "SHARK", "GOOSE", "CRANE", "EAGLE",
    "RAVEN", "FINCH", "ROBIN", "HERON", "STORK", "SNAKE", "VIPER", "COBRA", "GECKO", "LLAMA",
    "CAMEL", "BISON", "HORSE", "MOUSE", "OTTER", "SKUNK", "QUAIL", "PARROT", "JAGUAR", "PYTHON",
    "IGUANA", "TURTLE", "SALMON", "SPIDER", "BEETLE", "DONKEY", "MONKEY", "COUGAR", "FALCON",
    "CONDOR", "PIGEON", "RABBIT", "FERRET", "BADGER", "WALRUS", "OYSTER", "TOUCAN", "CHEETAH",
    "GORILLA", "DOLPHIN", "PANTHER", "PELICAN", "SPARROW", "HAMSTER", "BUFFALO", "MUSTANG",
    "LOBSTER", "OCTOPUS", "GAZELLE", "GIRAFFE", "PENGUIN", "ELEPHANT", "ANTELOPE", "HEDGEHOG",
    "REINDEER", "PHEASANT", "SQUIRREL", "KANGAROO", "FLAMINGO", "CARDINAL", "CHIPMUNK", "STARFISH",
    "SEAHORSE", "SCORPION", "MACKEREL",
];

const EN_FOOD: &[&str] = &[
    "PIE", "BUN", "RYE", "OAT", "HAM", "RIB", "EGG", "JAM", "FIG", "NUT", "SOY", "TEA", "ALE",
    "DIP", "GUM", "CAKE", "TART", "ROLL", "LOAF", "RICE", "BEAN", "CORN", "SEED", "BEEF", "PORK",
    "WING", "MILK", "SOUP", "STEW", "PEAR", "PLUM", "LIME", "SAGE", "DILL", "MINT", "CLAM", "CRAB",
    "FISH", "TOFU", "KALE", "HERB", "CHOP", "LAMB", "VEAL", "DATE", "KIWI", "TOAST", "CRUST",
    "CRUMB", "WHEAT", "GRAIN", "BACON", "STEAK", "CREAM", "BROTH", "SAUCE", "GRAVY", "APPLE",
    "GRAPE", "LEMON", "PEACH", "MANGO", "MELON", "BERRY", "OLIVE", "ONION", "SALAD", "PASTA",
    "PIZZA", "CANDY", "CHEESE", "YOGURT", "BUTTER", "CEREAL", "WAFFLE", "MUFFIN", "COOKIE",
    "PASTRY", "NOODLE", "PEPPER", "CARROT", "POTATO", "TURNIP", "RADISH", "CELERY", "GINGER",
    "GARLIC", "CHERRY", "BANANA", "PAPAYA", "BISCUIT", "PANCAKE", "GRANOLA", "OATMEAL", "AVOCADO",
    "CHICKEN", "SAUSAGE", "LOBSTER", "MUSTARD", "KETCHUP", "CRACKER", "PRETZEL", "POPCORN",
    "LASAGNA", "SANDWICH", "DUMPLING", "CINNAMON", "MUSHROOM", "BROCCOLI", "ZUCCHINI", "EGGPLANT",
    "HONEYDEW", "CHESTNUT", "TORTILLA", "SMOOTHIE", "LEMONADE",
];

const EN_HUMAN: &[&str] = &[
    "EYE", "LIP", "EAR", "JAW", "ARM", "RIB", "GUT", "HIP", "TOE", "LEG", "MAN", "BOY", "JOY",
    "CRY", "SHY", "HEAD", "FACE", "BROW", "NOSE", "CHIN", "NECK", "BACK", "HAND", "FIST", "PALM",
    "KNEE", "SKIN", "VEIN", "BONE", "CELL", "GENE", "SOUL", "MIND", "MOOD", "HOPE", "FEAR", "LOVE",
    "HATE", "BABY", "TEEN", "GIRL", "TWIN", "BODY", "HAIR", "LUNG", "FOOT", "THUMB", "ELBOW",
    "CHEST", "HEART", "BRAIN", "NERVE", "DREAM", "GRIEF", "CHILD", "ADULT", "ELDER", "WOMAN",
    "BLOOD", "SKULL", "SPINE", "ANKLE", "CHEEK", "SMILE", "VOICE", "SIGHT", "TOUCH", "SENSE",
    "THINK", "SLEEP", "TONGUE", "MUSCLE", "FINGER", "TISSUE", "BREATH", "MEMORY", "SPIRIT",
    "PEOPLE", "PARENT", "FRIEND", "SISTER", "SORROW", "TALENT", "BELIEF", "WISDOM", "VIRTUE",
    "MOTHER", "FATHER", "NEPHEW", "COUSIN", "BROTHER", "HUSBAND", "FEELING", "THOUGHT", "PASSION",
    "COURAGE", "EMOTION", "TODDLER", "GROWING", "HEALTHY", "THINKER", "ATHLETE", "DAUGHTER",
    "SHOULDER", "FOREHEAD", "INSTINCT", "PATIENCE", "STRENGTH", "CHILDREN", "THINKING", "FEELINGS",
    "LAUGHTER", "KINDNESS", "RELATIVE", "ANCESTOR",
];

const EN_HOME: &[&str] = &[
    "BED", "RUG", "MAT", "MUG", "CUP", "PAN", "POT", "FAN", "KEY", "TAP", "JAR", "LID", "TIN",
    "MOP", "BOX", "DOOR", "WALL", "ROOF", "TILE", "BEAM", "PANE", "DESK", "LAMP", "SINK", "OVEN",
    "BOWL", "DISH", "LOCK", "KNOB", "BOLT", "NAIL", "WIRE", "CORD", "PLUG", "ROOM", "HALL", "SOFA",
    "BATH", "IRON", "RACK", "HOOK", "TRAY", "VASE", "STEP", "YARD", "FLOOR", "GLASS", "BRICK",
    "FRAME", "CHAIR", "TABLE", "SHELF", "DRAPE", "STOVE", "PLATE", "HINGE", "SCREW", "FENCE",
    "PORCH", "TOWEL", "BROOM", "CLOTH", "BLIND", "BENCH", "STAIR", "BRUSH", "TRUNK", "CLOSET",
    "GARDEN", "GARAGE", "PILLOW", "MIRROR", "FAUCET", "SHOWER", "CARPET", "MANTEL", "PANTRY",
    "BUCKET", "CANDLE", "HEATER", "WINDOW", "BASKET", "SPONGE", "DRAWER", "KETTLE", "NAPKIN",
    "KITCHEN", "BEDROOM", "HALLWAY", "CEILING", "CABINET", "CURTAIN", "BLANKET", "COUNTER",
    "BALCONY", "DOORMAT", "CHIMNEY", "LAUNDRY", "CUSHION", "SHELTER", "BATHROOM", "BASEMENT",
    "BACKYARD", "DOORBELL", "ARMCHAIR", "BOOKCASE", "WARDROBE", "MATTRESS", "PLUMBING", "HANDRAIL",
    "ORNAMENT", "CUPBOARD", "STAIRWAY",
];

const EN_CITY: &[&str] = &[
    "BUS", "CAB", "VAN", "CAR", "JET", "BAR", "INN", "GYM", "SPA", "PUB", "LOT", "WAY", "HUB",
    "ARC", "ROAD", "LANE", "PARK", "MALL", "SHOP", "BANK", "POST", "CAFE", "CLUB", "SIGN", "POLE",
    "CURB", "WALK", "TAXI", "BIKE", "TRAM", "RAIL", "BOAT", "SHIP", "DOCK", "PIER", "PORT", "FLAT",
    "GATE", "ARCH", "SLAB", "CONE", "RAMP", "LIFT", "ZONE", "TOWN", "ALLEY", "BLOCK", "PLAZA",
    "COURT", "STORE", "HOTEL", "MOTEL", "TOWER", "TRAIN", "PLANE", "FERRY", "BENCH", "TRASH",
    "FENCE", "LIGHT", "METRO", "MOPED", "ROUTE", "DEPOT", "CROWD", "WHEEL", "METER", "CROSS",
    "NOISE", "BRIDGE", "TUNNEL", "AVENUE", "CHURCH", "MUSEUM", "SCHOOL", "MARKET", "CINEMA",
    "OFFICE", "STREET", "SUBWAY", "STATUE", "SQUARE", "GARAGE", "CORNER", "HARBOR", "PALACE",
    "TEMPLE", "OUTLET", "HIGHWAY", "TRANSIT", "AIRPORT", "STATION", "LIBRARY", "THEATER", "FACTORY",
    "PARKING", "TRAFFIC", "QUARTER", "RAILWAY", "BOROUGH", "VILLAGE", "TROLLEY", "BUILDING",
    "SIDEWALK", "MONUMENT", "HOSPITAL", "PHARMACY", "BOUTIQUE", "LANDMARK", "MOTORWAY", "TERMINAL",
    "DISTRICT", "CROSSING", "OVERPASS",
];

const EN_FASHION: &[&str] = &[
    "HAT", "CAP", "TIE", "BOW", "FUR", "GEM", "PIN", "DYE", "HEM", "TAB", "ZIP", "BIB", "WIG",
    "FIT", "COAT", "VEST", "CAPE", "ROBE", "HOOD", "BELT", "SHOE", "BOOT", "HEEL", "SOLE", "LACE",
    "SOCK", "CUFF", "RING", "BEAD", "GOLD", "SILK", "WOOL", "MESH", "GOWN", "WRAP", "SASH", "KNIT",
    "SNAP", "STUD", "VEIL", "BAND", "TRIM", "CORD", "TOTE", "SHIRT", "PANTS", "JEANS", "SKIRT",
    "DRESS", "SCARF", "GLOVE", "CHAIN", "PEARL", "JEWEL", "CHARM", "LINEN", "DENIM", "SUEDE",
    "PLAID", "SATIN", "TWEED", "WEAVE", "CLASP", "BERET", "SHAWL", "SMOCK", "FIBER", "PLEAT",
    "BLAZER", "JACKET", "TUXEDO", "SANDAL", "LOAFER", "CORSET", "ANORAK", "PONCHO", "FEDORA",
    "BEANIE", "BUCKLE", "BROOCH", "ANKLET", "CHOKER", "COTTON", "VELVET", "SEQUIN", "TASSEL",
    "RIBBON", "FABRIC", "SWEATER", "SNEAKER", "LEGGING", "PAJAMAS", "EARRING", "PENDANT", "DIAMOND",
    "PAISLEY", "FLANNEL", "CHIFFON", "LEATHER", "PRINTED", "NECKLACE", "CARDIGAN", "JUMPSUIT",
    "RAINCOAT", "STILETTO", "CASHMERE", "FOOTWEAR", "CUFFLINK", "WARDROBE", "OVERCOAT", "KNITWEAR",
];

const EN_TECH: &[&str] = &[
    "WEB", "APP", "BUG", "BOT", "NET", "HUB", "RAM", "USB", "PIN", "LOG", "TAG", "SQL", "API",
    "CPU", "GPU", "CODE", "DATA", "FILE", "BYTE", "DISK", "CHIP", "CARD", "PORT", "SLOT", "SITE",
    "PAGE", "LINK", "BLOG", "POST", "CHAT", "TEXT", "MAIL", "SPAM", "GAME", "TOOL", "HACK", "WIFI",
    "WAVE", "BAND", "NODE", "GRID", "FONT", "ICON", "LOOP", "PING", "SYNC", "SCAN", "MOUSE",
    "BOARD", "CABLE", "PIXEL", "PATCH", "VIRUS", "CLOUD", "TOKEN", "STACK", "FRAME", "DEBUG",
    "QUERY", "ARRAY", "INDEX", "CACHE", "FLASH", "ROUTE", "PRINT", "MODAL", "INPUT", "CLONE",
    "PARSE", "FETCH", "MERGE", "SCREEN", "SERVER", "SCRIPT", "SIGNAL", "DEVICE", "ROUTER", "TABLET",
    "SOCKET", "TOGGLE", "WIDGET", "KERNEL", "DRIVER", "MODULE", "CURSOR", "PLUGIN", "THREAD",
    "STREAM", "BINARY", "CODING", "BACKUP", "BROWSER", "PROGRAM", "NETWORK", "DESKTOP", "MONITOR",
    "DIGITAL", "COMPILE", "RUNTIME", "STORAGE", "GATEWAY", "HOSTING", "SCANNER", "DISPLAY",
    "SOFTWARE", "HARDWARE", "DATABASE", "KEYBOARD", "INTERNET", "DOWNLOAD", "WIRELESS", "COMPUTER",
    "AUTOMATE", "COMPILER", "TERMINAL", "FUNCTION", "PROTOCOL", "ETHERNET",
];

const EN_TRAVEL: &[&str] = &[
    "MAP", "BAG", "INN", "SKI", "SEA", "SPA", "CAB", "FLY", "ROW", "JOG", "HOP", "DIP", "VAN",
    "TRIP", "TOUR", "TREK", "HIKE", "WALK", "RIDE", "SAIL", "ROAD", "PATH", "GATE", "EXIT", "RAMP",
    "LOOP", "CASE", "PACK", "VISA", "ROOM", "POOL", "TENT", "CAMP", "HOST", "CREW", "DOCK", "PORT",
    "DECK", "RAFT", "LAKE", "COVE", "GULF", "CAPE", "ISLE", "PASS", "DRIVE", "TRAIL", "ROUTE",
    "BEACH", "CABIN", "GUIDE", "GUEST", "LOCAL", "OASIS", "TRAIN", "PLANE", "FERRY", "CANOE",
    "KAYAK", "YACHT", "VISTA", "LODGE", "MOTEL", "HOTEL", "DEPOT", "CARGO", "COAST", "WHARF",
    "FLIGHT", "CRUISE", "VOYAGE", "SAFARI", "RESORT", "BRIDGE", "TEMPLE", "CASTLE", "PALACE",
    "MUSEUM", "TICKET", "VALLEY", "ISLAND", "CANYON", "MARINA", "HOSTEL", "TRAVEL", "LOUNGE",
    "SCENIC", "HARBOR", "AIRPORT", "LUGGAGE", "TRANSIT", "COMPASS", "JOURNEY", "TOURIST", "CAMPING",
    "SAILING", "CUSTOMS", "HOLIDAY", "CARAVAN", "GETAWAY", "CHARTER", "PASSPORT", "SUITCASE",
    "BACKPACK", "EXPLORER", "VACATION", "RAILROAD", "TERMINAL", "BOARDING", "TRAVELER", "LANDMARK",
    "MONUMENT", "SEASHORE", "PANORAMA", "ROADTRIP",
];

const EN_SCIENCE: &[&str] = &[
    "ION", "GAS", "RAY", "LAB", "DNA", "RNA", "ARC", "ORB", "OHM", "ERG", "AMP", "DIM", "HOT",
    "WET", "MIX", "ATOM", "BOND", "MASS", "HEAT", "WAVE", "CELL", "GENE", "LIFE", "FACT", "LENS",
    "BEAM", "SCAN", "ACID", "BASE", "SALT", "FLUX", "FUSE", "VOLT", "WATT", "CORE", "DATA", "IRON",
    "LEAD", "ZINC", "NEON", "GOLD", "TANK", "TUBE", "DROP", "FLOW", "SPIN", "DOSE", "FORCE",
    "LIGHT", "FIELD", "TRAIT", "DEATH", "BIRTH", "DECAY", "PROBE", "PULSE", "IMAGE", "SOLID",
    "METAL", "ALLOY", "TRIAL", "PROOF", "GRAPH", "MODEL", "ORBIT", "QUARK", "LASER", "PRISM",
    "STEAM", "RADAR", "SCALE", "LIQUID", "PLASMA", "ENERGY", "MOTION", "PROTON", "PHOTON", "FOSSIL",
    "SAMPLE", "THEORY", "RESULT", "METHOD", "MATTER", "NEURON", "FUSION", "OXYGEN", "CARBON",
    "HELIUM", "COPPER", "CRYSTAL", "ELEMENT", "FORMULA", "NEUTRON", "ISOTOPE", "MINERAL", "POLYMER",
    "BIOLOGY", "PHYSICS", "GRAVITY", "DENSITY", "VOLTAGE", "CHEMIST", "NUCLEUS", "MOLECULE",
    "ELECTRON", "CHEMICAL", "REACTION", "PARTICLE", "SPECTRUM", "CATALYST", "ORGANISM", "BACTERIA",
    "HYDROGEN", "NITROGEN", "TITANIUM", "CALCULUS", "COMPOUND",
];

const ES_NATURE: &[&str] = &[
    "RIO", "MAR", "OLA", "SOL", "DIA", "LUZ", "VID", "ERA", "GEL", "TUL", "CAL", "RED", "SAL",
    "HOJA", "RAIZ", "RAMA", "FLOR", "PINO", "LAGO", "ROCA", "ISLA", "CABO", "LUNA", "NUBE", "ALBA",
    "ROSA", "LODO", "SETA", "ALGA", "OLMO", "CIMA", "LOMA", "PICO", "FOSA", "DUNA", "GOTA", "LAVA",
    "MINA", "OLEO", "ARBOL", "TALLO", "MUSGO", "ROBLE", "SELVA", "PLAYA", "ARENA", "MONTE", "VALLE",
    "CERRO", "CUEVA", "COSTA", "BAHIA", "SUELO", "NIEVE", "HIELO", "BRISA", "CIELO", "NOCHE",
    "CAMPO", "PRADO", "LIRIO", "CORAL", "SAUCE", "HIERBA", "BOSQUE", "PIEDRA", "TIERRA", "LLUVIA",
    "NIEBLA", "JARDIN", "PARQUE", "LAGUNA", "COLINA", "TRONCO", "HELADA", "ESPIGA", "JUNCO",
    "ESPUMA", "SEMILLA", "CHOPERA", "PINEDA", "CASCADA", "PRADERA", "GLACIAR", "LLANURA", "PANTANO",
    "BARRANCO", "COSECHA", "FOLLAJE", "SABANA", "ESTEPA", "VOLCAN", "MESETA", "RIBERA", "ESTRELLA",
    "AMANECER", "TEMPORAL", "SENDERO", "HUMEDAL", "PEDREGAL", "ARRECIFE", "TORRENTE",
];

const ES_ANIMALS: &[&str] = &[
    "OSO", "PEZ", "AVE", "RES", "BOA", "GNU", "EMU", "CAN", "YAK", "KOI", "ROE", "BUE", "MUL",
    "GATO", "LOBO", "LEON", "PUMA", "PATO", "RANA", "SAPO", "FOCA", "TORO", "VACA", "MULA", "BUHO",
    "ORCA", "MONO", "GAMO", "CUCO", "RATA", "PONI", "LORO", "ALCE", "NIDO", "CRIA", "MULO", "LORA",
    "PERRO", "ZORRO", "TIGRE", "CISNE", "GANSO", "CABRA", "OVEJA", "BURRO", "MOSCA", "ABEJA",
    "CERDO", "POLLO", "CORAL", "BUITRE", "GRILLO", "CUERVO", "LIEBRE", "TRUCHA", "PULPO", "GARZA",
    "ARDILLA", "LINCE", "HALCON", "PALOMA", "AVISPA", "SALMON", "VENADO", "IGUANA", "NUTRIA",
    "GRULLA", "CAIMAN", "CONCHA", "PAJARO", "CONEJO", "DELFIN", "AGUILA", "MEDUSA", "LAGARTO",
    "GORILA", "JIRAFA", "ARANA", "GALLINA", "TORTUGA", "SERPIENTE", "LEOPARDO", "POLILLA",
    "CANGURO", "CABRITO", "POTRO", "MORSA", "ELEFANTE", "FLAMENCO", "CAMALEON", "ALBATROS",
    "CORALINO", "PEREZOSO", "CABALLITO", "DROMEDARIO",
];

const ES_FOOD: &[&str] = &[
    "PAN", "SAL", "UVA", "AJO", "COL", "RON", "GEL", "MES", "SOL", "OCA", "NUZ", "TES", "VID",
    "TORTA", "TARTA", "BOLLO", "ARROZ", "MAIZ", "TRIGO", "CARNE", "POLLO", "JAMON", "HUEVO",
    "LECHE", "SOPA", "MIEL", "FRESA", "NUEZ", "PERA", "LIMA", "NATA", "PAPA", "PURE", "CAFE",
    "HIGO", "KIWI", "SOJA", "PAVO", "ATUN", "COCO", "JUGO", "TACO", "CREMA", "QUESO", "YOGUR",
    "CALDO", "SALSA", "LIMON", "MELON", "CHILE", "PASTA", "PIZZA", "DULCE", "JALEA", "GUISO",
    "ASADO", "ADOBO", "FILETE", "MANGO", "CEREZA", "AVENA", "SUSHI", "PASTEL", "TOCINO", "POSTRE",
    "MANJAR", "BATIDO", "HELADO", "SANDIA", "CEBADA", "ACEITE", "AZUCAR", "GALLETA", "GRANOLA",
    "MANTECA", "PATATA", "PEPINO", "TOMATE", "CANELA", "VINAGRE", "EMPANADA", "CHURROS", "ALMENDRA",
    "MOSTAZA", "CALZONE", "BIZCOCHO", "CALABAZA", "ESPINACA", "CARAMELO", "SANDWICH", "TORTILLA",
    "PAELLA", "REFRESCO", "GELATINA", "MAHONESA", "LIMONADA",
];

const ES_HUMAN: &[&str] = &[
    "OJO", "PIE", "SER", "VER", "VOZ", "FIN", "MAL", "PAZ", "LUZ", "VIA", "SED", "RED", "ERA",
    "CARA", "BOCA", "DEDO", "CODO", "PIEL", "ALMA", "AMOR", "BEBE", "RISA", "MANO", "PELO", "PASO",
    "HIJO", "MAMA", "PAPA", "ODIO", "VIDA", "NINO", "DIOS", "EDAD", "OIDO", "CELO", "ABAD", "BRAZO",
    "JOVEN", "MUJER", "CHICO", "CHICA", "PECHO", "TALON", "GENIO", "DOLOR", "CALMA", "VISTA",
    "SUENO", "MIEDO", "MENTE", "LABIO", "HUESO", "GEMELO", "HOMBRE", "ADULTO", "FRENTE", "PIERNA",
    "NERVIO", "MUSCULO", "SANGRE", "LENGUA", "DIENTE", "CUELLO", "HOMBRO", "CEREBRO", "CABEZA",
    "ESPOSA", "ESPOSO", "ABUELO", "ABUELA", "FUERZA", "VIRTUD", "SENTIDO", "HERMANO", "HERMANA",
    "SOBRINO", "COLUMNA", "COLCHON", "DERECHO", "TERNURA", "AMISTAD", "VALENTIA", "RESPETO",
    "TALENTO", "COMEDOR", "INFANCIA", "FORTALEZA", "VOLUNTAD", "RECUERDO", "SOCIEDAD", "IDENTIDAD",
    "HUMANIDAD", "FELICIDAD", "BIENESTAR",
];

const ES_HOME: &[&str] = &[
    "LUZ", "GAS", "RED", "SOL", "LAR", "CAL", "VER", "TUL", "GEL", "BAR", "OCA", "ERA", "TEL",
    "CAMA", "MESA", "SOFA", "VASO", "TAZA", "OLLA", "CUBO", "AIRE", "VIGA", "PISO", "MURO", "PILA",
    "LOZA", "FOCO", "TUBO", "ROPA", "LATA", "TINA", "HILO", "PALA", "BOTE", "CAJA", "BAUL", "POMO",
    "GRIFO", "JABON", "PLATO", "FUNDA", "PUERTA", "PARED", "TECHO", "SUELO", "DUCHA", "HORNO",
    "CABLE", "LLAVE", "MARCO", "PLANTA", "TRAPO", "BOLSA", "MANTA", "SILLA", "MUEBLE", "COCINA",
    "ESPEJO", "TIMBRE", "NEVERA", "LAVABO", "SARTEN", "ESCOBA", "MACETA", "BALCON", "SOTANO",
    "JARDIN", "GARAJE", "CORTINA", "LAMPARA", "VENTANA", "ARMARIO", "PASILLO", "ENCHUFE", "COLCHON",
    "COMEDOR", "TERRAZA", "CHIMENEA", "ROPERO", "PERCHERO", "DESPENSA", "ESCALERA", "ALMOHADA",
    "LAVADORA", "CERRADURA", "RADIADOR", "ALFOMBRA", "ESTANTE", "TABURETE", "FREGADERO",
    "ESCRITORIO", "LITERA",
];

const ES_CITY: &[&str] = &[
    "BAR", "BUS", "CAR", "LUZ", "VIA", "RED", "GAS", "RIO", "PIE", "FIN", "PAR", "SUR", "ERA",
    "CAFE", "TAXI", "MOTO", "BICI", "TREN", "CINE", "PASO", "PISO", "FARO", "MURO", "ARCO", "ZONA",
    "RUTA", "OBRA", "VADO", "PARO", "RIEL", "NAVE", "PEON", "STOP", "NODO", "BOCA", "MINA", "AIRE",
    "CALLE", "PLAZA", "VENTA", "POSTE", "BANCO", "HOTEL", "COCHE", "AVION", "BARCO", "RAMPA",
    "VERJA", "ACERA", "METRO", "ANDEN", "PASEO", "FUENTE", "MUSEO", "CAMPO", "TORRE", "PARED",
    "CRUCE", "BOLSA", "TIENDA", "PARQUE", "BARRIO", "CENTRO", "MUELLE", "PUENTE", "TUNEL",
    "ESQUINA", "FABRICA", "OFICINA", "ROTONDA", "MERCADO", "CORREO", "TEATRO", "IGLESIA", "PALACIO",
    "CALLEJON", "TRANVIA", "ESTATUA", "ESTACION", "CATEDRAL", "FARMACIA", "ESCUELA", "ESTADIO",
    "SEMAFORO", "EDIFICIO", "GIMNASIO", "BOMBEROS", "CORREOS", "HOSPITAL", "MONUMENTO",
];

const ES_FASHION: &[&str] = &[
    "ORO", "GEL", "PIE", "RED", "TUL", "LUZ", "SOL", "PIN", "FIN", "MOD", "RAZ", "ALO", "VER",
    "BOTA", "CAPA", "BATA", "SEDA", "LANA", "HILO", "TELA", "PIEL", "RUBI", "LAZO", "FAJA", "GALA",
    "MODA", "TACO", "RASO", "NUDO", "MONO", "TOGA", "VELO", "FINO", "BOLSO", "OJAL", "GORRA",
    "TRAJE", "PERLA", "PLATA", "CIERRE", "CUERO", "TINTE", "FIBRA", "TELAR", "SUELA", "FORRO",
    "PUNTO", "PAÑO", "LIENZO", "CREMA", "LENTEJUELA", "FELPA", "DRAPE", "ROSCA", "FLECO", "CAMISA",
    "FALDA", "ZAPATO", "CORDON", "MEDIA", "GUANTE", "ANILLO", "COLLAR", "BROCHE", "GAMUZA",
    "CHALECO", "ABRIGO", "CORREA", "HEBILLA", "BOTON", "ENCAJE", "BORDADO", "FLECOS", "SOLAPA",
    "JERSEY", "BLUSON", "TACONES", "ESTAMPA", "PIJAMA", "DIADEMA", "MANOPLA", "TIRANTES",
    "COLGANTE", "GEMELOS", "TURBANTE", "BERMUDAS", "PASARELA", "ALPARGATA", "PANTALON", "SOMBRERO",
    "CALCETIN", "CAMISETA", "CAZADORA", "SUDADERA", "CACHEMIRA", "PENDIENTE",
];

const ES_TECH: &[&str] = &[
    "WEB", "APP", "RED", "USB", "CPU", "GPS", "PIN", "BOT", "RAM", "GIF", "PDF", "URL", "LUZ",
    "DATO", "CHIP", "WIFI", "CHAT", "BLOG", "FORO", "SPAM", "NUBE", "BASE", "MAPA", "MENU", "MODO",
    "BITS", "RUTA", "TIPO", "ZONA", "GUIA", "ICONO", "CLAVE", "LISTA", "VISTA", "FUENTE", "CARGA",
    "TABLA", "DISCO", "TECLA", "RATON", "ENVIO", "SITIO", "VIDEO", "AUDIO", "JUEGO", "PIXEL",
    "CAMPO", "BOTON", "CLICK", "ERROR", "COPIA", "TEXTO", "PANEL", "MARCO", "PERFIL", "FORMA",
    "CABLE", "RANURA", "PUERTO", "SENAL", "ANTENA", "MODEM", "PAGINA", "ENLACE", "CORREO", "PARCHE",
    "CODIGO", "BACKUP", "IMAGEN", "SONIDO", "BUSCAR", "ACCESO", "SALIDA", "CURSOR", "CARPETA",
    "FORMATO", "SCRIPT", "MODULO", "DRIVER", "KERNEL", "PLUGIN", "SOCKET", "TECLADO", "MENSAJE",
    "TARJETA", "MEMORIA", "BATERIA", "ARCHIVO", "SISTEMA", "ESCANER", "MONITOR", "PROGRAMA",
    "INTERFAZ", "DESCARGA", "SOFTWARE", "HARDWARE", "INTERNET", "TERMINAL", "ETHERNET",
];

const ES_TRAVEL: &[&str] = &[
    "MAR", "SOL", "VIA", "SUR", "RIO", "GPS", "SKI", "SPA", "BUS", "FIN", "RED", "GAS", "PIE",
    "TOUR", "RUTA", "MAPA", "GUIA", "FOTO", "VISA", "TAXI", "TREN", "ISLA", "LAGO", "BOTE", "MOTO",
    "BICI", "PASE", "FARO", "CABO", "CIMA", "PASO", "VADO", "ZONA", "FILA", "NAVE", "DATO", "RIEL",
    "VIAJE", "VUELO", "HOTEL", "PLAYA", "MONTE", "SELVA", "BARCO", "AVION", "PISTA", "COSTA",
    "ARENA", "MALETA", "BOLETO", "PASAJE", "HOSTAL", "CABANA", "LODGE", "CAMPO", "NORTE", "BAHIA",
    "RANGO", "VELERO", "CAMINO", "RESORT", "DESTINO", "POSTAL", "ADUANA", "TURISTA", "CRUCERO",
    "BRUJULA", "EQUIPAJE", "LLEGADA", "SALIDA", "MERCADO", "TEMPLO", "MUSEO", "PALACIO", "MIRADOR",
    "PAISAJE", "CASTILLO", "SENDERO", "REFUGIO", "TRAVESIA", "ESCALADA", "AVENTURA", "TURISMO",
    "ESTANCIA", "CARAVANA", "HOSPEDAJE", "TERMINAL", "PANORAMA",
];

const ES_SCIENCE: &[&str] = &[
    "ION", "GAS", "ADN", "LUZ", "LEY", "SAL", "SOL", "OHM", "ERG", "AMP", "CAL", "RED", "GEL",
    "VIDA", "MASA", "PESO", "ONDA", "DATO", "TUBO", "RAYO", "ZONA", "POLO", "CERO", "ARCO", "PILA",
    "NUDO", "RAIZ", "CAPA", "FASE", "CARGA", "CAMPO", "FLUJO", "ACIDO", "BASE", "PLOMO", "VACIO",
    "CALOR", "DOSIS", "PULSO", "LASER", "LENTE", "METAL", "TABLA", "PRUEBA", "MODELO", "ENSAYO",
    "PLASMA", "HIERRO", "COBRE", "PLATA", "LITIO", "AZUFRE", "TEJIDO", "ORGANO", "NERVIO", "HELIO",
    "NEON", "ZINC", "FUERZA", "PROTON", "FOTON", "NUCLEO", "VOLTAJE", "LIQUIDO", "SOLIDO",
    "CRISTAL", "MINERAL", "OXIGENO", "CARBONO", "NEUTRON", "ISOTOPO", "POLIMERO", "GRAVEDAD",
    "QUIMICA", "FORMULA", "ELEMENTO", "PROBETA", "MOLECULA", "ECUACION", "TEOREMA", "ANALISIS",
    "MEZCLA", "FISICA", "REACCION", "ESPECTRO", "TITANIO", "UNIVERSO", "GALAXIA", "BACTERIA",
    "COMPUESTO",
];


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_words() {
        for lang in Language::ALL {
            for cat in Category::ALL {
                assert!(!cat.words(lang).is_empty(), "{lang:?} {cat:?}");
                assert!(cat.pool(lang, 4).len() >= 3, "{lang:?} {cat:?}");
            }
        }
    }

    #[test]
    fn test_category_cycles_with_block() {
        assert_eq!(Category::for_block(0), Category::Nature);
        assert_eq!(Category::for_block(2), Category::Food);
        assert_eq!(Category::for_block(19), Category::Science);
        assert_eq!(Category::for_block(10), Category::Nature);
    }

    #[test]
    fn test_pool_filters_length_and_letters() {
        let pool = Category::Home.pool(Language::Es, 8);
        assert!(pool.iter().all(|w| is_grid_word(w) && w.len() <= 8));
        assert!(!is_grid_word("PAÑO"));
        assert!(!is_grid_word(""));
        assert!(is_grid_word("SNOW"));
    }

    #[test]
    fn test_names() {
        assert_eq!(Category::Tech.name(Language::Es), "Tecnología");
        assert_eq!(Category::from_str("Travel"), Some(Category::Travel));
        assert_eq!(world_names(Language::En)[0], "The Green Forest");
        assert_eq!(world_names(Language::Es)[19], "Ciencia Espacial");
    }
}
