//! Static geography: the land/water world bitmap, the hand-placed city
//! markers that go with it, and the city catalog.

use std::fmt;
use std::sync::LazyLock;

/// A monochrome pixel grid, `true` = land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// All-water bitmap of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Build from rows of '0'/'1' characters. Width is taken from the widest
    /// row; short rows are padded with water and any character other than
    /// '1' counts as water.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut bitmap = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, b) in row.bytes().enumerate() {
                bitmap.set(x, y, b == b'1');
            }
        }
        bitmap
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y); anything outside the grid is water.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, land: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = land;
        }
    }

    /// Rows rendered back as '0'/'1' strings
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.get(x, y) { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }
}

// Equirectangular world map, north pole at the top, 132 x 56 pixels
const WORLD_ROWS: [&str; 56] = [
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000001100000000000000000000001111111111000000000000000000000000000000",
    "000000000000001100000000000000000000000000000000000000000000000001111111100000000000000000011111111111100000000000000000000000000000",
    "000000000000111111100000000000000000000000000000000000000000001111111111110000000000000001111111111111111000000000000000000000000000",
    "000000000011111111111100000000000000000000000000000000000000011111111111111100000000000011111111111111111100000000000000000000000000",
    "000000000111111111111111000000000000000000000000000000000000111111111111111100000001101111111111111111111110000000000000000000000000",
    "000000001111111111111111100000000000000000000000000000000001111111111111111111111111111111111111111111111111000000000000000000000000",
    "000000001111111111111111110000000000000000000000000000000011111111111111111111111111111111111111111111111111100000000000000000000000",
    "000000011111111111111111111000000000000000000000000000000111111111111111111111111111111111111111111111111111110000000000000000000000",
    "000000011111111111111111111000000000000000000000000000011111111111111111111111111111111111111111111111111111111000000000000000000000",
    "000000111111111111111111111100000000000000000000000000111111111111111111111111111111111111111111111111111111111110000000000000000000",
    "000000111111111111111111111110000000000000000000000001111111111111111111111111111111111111111111111111111111111111000000000000000000",
    "000000111111111111111111111111000000000000000000000001111111111111111111111111111111111111111111111111111111111111100000000000000000",
    "000001111111111111111111111111000000000000000000000001111111111111111111111111111111111111111111111111111111111111110000000000000000",
    "000001111111111111111111111111100000000000000000000001111111111111111111111111111111111111111111111111111111111111111000000000000000",
    "000001111111111111111111111111100000000000000000000001111111111111111111111111111111111111111111111111111111111111111100000000000000",
    "000001111111111111111111111111100000000000000000000001111111111111111111111111111111111111111111111111111111111111111110000000000000",
    "000001111111111111111111111111110000000000000000000000111111111111111111111111111111111111111111111111111111111111111110000000000000",
    "000000111111111111111111111111110000000000000000000000011111111111111111111111111111111111111111111111111111111111111110000000000000",
    "000000011111111111111111111111110000000000000000000000001111111111111111111111111111111111111111111111111111111111111100000000000000",
    "000000001111111111111111111111110000000000000000000000000011111111111101111111111111111111111111111111111111111111111000000000000000",
    "000000000111111111111111111111000000000000000000000000000001111111111000011111111111111111111111111111111111111111100000000000000000",
    "000000000011111111111111111111000000000000000000000000000000011111110000001111111111111111111111111111111011111110000000000000000000",
    "000000000001111111111111111110000000000000000000000000000000001111000000011111111111111111111111111111110001111100000000000000000000",
    "000000000000111111110011111100000000000000000000000000000000000000000000111111111111111111111111111111000000110000000000000000000000",
    "000000000000111111100001111100000000000000000000000000000000000000000001111111111111111011111111111100000000000000000000000000000000",
    "000000000000011111000001111100000000000000000000000000000000000000000011111111111111100001111111111000000000000000000000000000000000",
    "000000000000001111100001111110000000000000000000000000000000000000000011111111111110000000111111110000000000000000000000000000000000",
    "000000000000000111100001111110000000000000000000000000000000000000000001111111110000000000011111100000000000000000000000000000000000",
    "000000000000000111100000111110000000000000000000000000000000000000000000111111100000000000011111000000000000000000000000000000000000",
    "000000000000000011110000111111000000000000000000000000000000000000000000001110000000000000011110000000000000000000000000000000000000",
    "000000000000000001110000011111000000000000000000000000000000000000000000000000000000000000001100000000000000000000000000000000000000",
    "000000000000000001110000011111100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000111000001111100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000111000000111110000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000011100000011111000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000001100000011111100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000001110000001111100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000110000001111110000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000111000000111111000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000011000000011111000000000000000000000000000000000000000000000000000000000000000011111111100000000000000000000000",
    "000000000000000000000011100000011111100000000000000000000000000000000000000000000000000000000000000111111111110000000000000000000000",
    "000000000000000000000001100000001111100000000000000000000000000000000000000000000000000000000000001111111111111000000000000000000000",
    "000000000000000000000001100000000111100000000000000000000000000000000000000000000000000000000000001111111111111100000000000000000000",
    "000000000000000000000000110000000011110000000000000000000000000000000000000000000000000000000000001111111111111100000000000000000000",
    "000000000000000000000000010000000001110000000000000000000000000000000000000000000000000000000000000111111111111000000000000000000000",
    "000000000000000000000000000000000000110000000000000000000000000000000000000000000000000000000000000011111111110000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001111111100000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000011100000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000001111111111111111111111111111111111111111111111111111111111111111111111111111111111111000000000000000000000",
    "000000000000000000000001111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111000000000000000000",
    "000000000000000000001111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111000000000000000",
    "000000000000000001111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111110000000000000",
];

/// The world bitmap, parsed once and shared read-only by every render.
pub static WORLD: LazyLock<Bitmap> = LazyLock::new(|| Bitmap::from_rows(&WORLD_ROWS));

/// Glyph-grid size the world bitmap encodes to without scaling.
pub const NATIVE_COLS: usize = 66;
pub const NATIVE_ROWS: usize = 14;

/// A city label placed on the glyph grid (character coordinates, not pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CityMarker {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
    pub color: &'static str,
}

/// Markers hand-placed on the native 66 x 14 grid
pub static NATIVE_MARKERS: [CityMarker; 16] = [
    CityMarker { label: "HNL", row: 6, col: 2, color: "turquoise" },
    CityMarker { label: "ANC", row: 3, col: 7, color: "lightcyan" },
    CityMarker { label: "LA", row: 4, col: 12, color: "darkcyan" },
    CityMarker { label: "NYC", row: 4, col: 17, color: "dodgerblue" },
    CityMarker { label: "GRU", row: 9, col: 18, color: "limegreen" },
    CityMarker { label: "LON", row: 3, col: 31, color: "green" },
    CityMarker { label: "PAR", row: 3, col: 35, color: "darkgreen" },
    CityMarker { label: "MOS", row: 3, col: 39, color: "red" },
    CityMarker { label: "CAI", row: 5, col: 33, color: "sandybrown" },
    CityMarker { label: "NBO", row: 7, col: 35, color: "coral" },
    CityMarker { label: "DXB", row: 5, col: 38, color: "gold" },
    CityMarker { label: "BOM", row: 6, col: 41, color: "orange" },
    CityMarker { label: "SIN", row: 7, col: 46, color: "darkmagenta" },
    CityMarker { label: "PVG", row: 4, col: 49, color: "orangered" },
    CityMarker { label: "TYO", row: 4, col: 52, color: "deeppink" },
    CityMarker { label: "SYD", row: 11, col: 53, color: "yellow" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Americas,
    Europe,
    MiddleEast,
    Africa,
    Asia,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Americas,
        Region::Europe,
        Region::MiddleEast,
        Region::Africa,
        Region::Asia,
        Region::Oceania,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
        })
    }
}

/// A catalog city
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// Short map label
    pub code: &'static str,
    pub timezone: &'static str,
    pub country: &'static str,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
    pub color: &'static str,
}

const fn city(
    name: &'static str,
    code: &'static str,
    timezone: &'static str,
    country: &'static str,
    region: Region,
    lat: f64,
    lon: f64,
    color: &'static str,
) -> City {
    City { name, code, timezone, country, region, lat, lon, color }
}

pub static CITIES: [City; 42] = [
    // Americas
    city("Honolulu", "HNL", "Pacific/Honolulu", "USA", Region::Americas, 21.3069, -157.8583, "turquoise"),
    city("Anchorage", "ANC", "America/Anchorage", "USA", Region::Americas, 61.2181, -149.9003, "lightcyan"),
    city("Los Angeles", "LA", "America/Los_Angeles", "USA", Region::Americas, 34.0522, -118.2437, "darkcyan"),
    city("Vancouver", "YVR", "America/Vancouver", "Canada", Region::Americas, 49.2827, -123.1207, "cadetblue"),
    city("San Francisco", "SF", "America/Los_Angeles", "USA", Region::Americas, 37.7749, -122.4194, "steelblue"),
    city("Denver", "DEN", "America/Denver", "USA", Region::Americas, 39.7392, -104.9903, "mediumseagreen"),
    city("Chicago", "CHI", "America/Chicago", "USA", Region::Americas, 41.8781, -87.6298, "seagreen"),
    city("Toronto", "YYZ", "America/Toronto", "Canada", Region::Americas, 43.6532, -79.3832, "darkslategray"),
    city("New York", "NYC", "America/New_York", "USA", Region::Americas, 40.7128, -74.0060, "dodgerblue"),
    city("Miami", "MIA", "America/New_York", "USA", Region::Americas, 25.7617, -80.1918, "deepskyblue"),
    city("Mexico City", "MEX", "America/Mexico_City", "Mexico", Region::Americas, 19.4326, -99.1332, "lawngreen"),
    city("Sao Paulo", "GRU", "America/Sao_Paulo", "Brazil", Region::Americas, -23.5505, -46.6333, "limegreen"),
    city("Buenos Aires", "BUE", "America/Argentina/Buenos_Aires", "Argentina", Region::Americas, -34.6037, -58.3816, "mediumspringgreen"),
    // Europe
    city("London", "LON", "Europe/London", "UK", Region::Europe, 51.5074, -0.1278, "green"),
    city("Lisbon", "LIS", "Europe/Lisbon", "Portugal", Region::Europe, 38.7223, -9.1393, "palegreen"),
    city("Amsterdam", "AMS", "Europe/Amsterdam", "Netherlands", Region::Europe, 52.3676, 4.9041, "springgreen"),
    city("Paris", "PAR", "Europe/Paris", "France", Region::Europe, 48.8566, 2.3522, "darkgreen"),
    city("Berlin", "BER", "Europe/Berlin", "Germany", Region::Europe, 52.5200, 13.4050, "forestgreen"),
    city("Stockholm", "STO", "Europe/Stockholm", "Sweden", Region::Europe, 59.3293, 18.0686, "yellowgreen"),
    city("Warsaw", "WAW", "Europe/Warsaw", "Poland", Region::Europe, 52.2297, 21.0122, "darkseagreen"),
    city("Athens", "ATH", "Europe/Athens", "Greece", Region::Europe, 37.9838, 23.7275, "mediumaquamarine"),
    city("Moscow", "MOS", "Europe/Moscow", "Russia", Region::Europe, 55.7558, 37.6173, "red"),
    city("Istanbul", "IST", "Europe/Istanbul", "Turkey", Region::Europe, 41.0082, 28.9784, "indianred"),
    // Middle East
    city("Dubai", "DXB", "Asia/Dubai", "UAE", Region::MiddleEast, 25.2048, 55.2708, "gold"),
    city("Tel Aviv", "TLV", "Asia/Jerusalem", "Israel", Region::MiddleEast, 32.0853, 34.7818, "orangered"),
    city("Riyadh", "RUH", "Asia/Riyadh", "Saudi Arabia", Region::MiddleEast, 24.7136, 46.6753, "darkorange"),
    // Africa
    city("Cairo", "CAI", "Africa/Cairo", "Egypt", Region::Africa, 30.0444, 31.2357, "sandybrown"),
    city("Lagos", "LOS", "Africa/Lagos", "Nigeria", Region::Africa, 6.5244, 3.3792, "chocolate"),
    city("Johannesburg", "JNB", "Africa/Johannesburg", "South Africa", Region::Africa, -26.2041, 28.0473, "peru"),
    city("Nairobi", "NBO", "Africa/Nairobi", "Kenya", Region::Africa, -1.2921, 36.8219, "coral"),
    // Asia
    city("Karachi", "KHI", "Asia/Karachi", "Pakistan", Region::Asia, 24.8607, 67.0011, "darksalmon"),
    city("Mumbai", "BOM", "Asia/Kolkata", "India", Region::Asia, 19.0760, 72.8777, "orange"),
    city("Bangkok", "BKK", "Asia/Bangkok", "Thailand", Region::Asia, 13.7563, 100.5018, "tomato"),
    city("Jakarta", "JKT", "Asia/Jakarta", "Indonesia", Region::Asia, -6.2088, 106.8456, "crimson"),
    city("Singapore", "SIN", "Asia/Singapore", "Singapore", Region::Asia, 1.3521, 103.8198, "darkmagenta"),
    city("Manila", "MNL", "Asia/Manila", "Philippines", Region::Asia, 14.5995, 120.9842, "hotpink"),
    city("Hong Kong", "HKG", "Asia/Hong_Kong", "Hong Kong", Region::Asia, 22.3193, 114.1694, "darkmagenta"),
    city("Shanghai", "PVG", "Asia/Shanghai", "China", Region::Asia, 31.2304, 121.4737, "orangered"),
    city("Seoul", "SEL", "Asia/Seoul", "South Korea", Region::Asia, 37.5665, 126.9780, "mediumvioletred"),
    city("Tokyo", "TYO", "Asia/Tokyo", "Japan", Region::Asia, 35.6762, 139.6503, "deeppink"),
    // Oceania
    city("Auckland", "AKL", "Pacific/Auckland", "New Zealand", Region::Oceania, -36.8485, 174.7633, "khaki"),
    city("Sydney", "SYD", "Australia/Sydney", "Australia", Region::Oceania, -33.8688, 151.2093, "yellow"),
];

static ALIASES: [(&str, &str); 30] = [
    ("nyc", "New York"),
    ("ny", "New York"),
    ("lax", "Los Angeles"),
    ("la", "Los Angeles"),
    ("sf", "San Francisco"),
    ("london", "London"),
    ("lon", "London"),
    ("paris", "Paris"),
    ("par", "Paris"),
    ("tokyo", "Tokyo"),
    ("tyo", "Tokyo"),
    ("singapore", "Singapore"),
    ("sin", "Singapore"),
    ("dubai", "Dubai"),
    ("dxb", "Dubai"),
    ("sydney", "Sydney"),
    ("syd", "Sydney"),
    ("hong kong", "Hong Kong"),
    ("hk", "Hong Kong"),
    ("mumbai", "Mumbai"),
    ("bom", "Mumbai"),
    ("shanghai", "Shanghai"),
    ("pvg", "Shanghai"),
    ("toronto", "Toronto"),
    ("yvr", "Vancouver"),
    ("mex", "Mexico City"),
    ("sao paulo", "Sao Paulo"),
    ("gru", "Sao Paulo"),
    ("buenos", "Buenos Aires"),
    ("bue", "Buenos Aires"),
];

/// Look up a city by name or alias, ignoring case and surrounding space.
pub fn find_city(name: &str) -> Option<&'static City> {
    let wanted = name.trim().to_lowercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, full)| full.to_lowercase())
        .unwrap_or(wanted);

    CITIES.iter().find(|c| c.name.to_lowercase() == canonical)
}

pub fn cities_in(region: Region) -> impl Iterator<Item = &'static City> {
    CITIES.iter().filter(move |c| c.region == region)
}
