//! OpenWeatherMap condition codes and their classification.
//!
//! See <https://openweathermap.org/weather-conditions> for the provider's list.

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// A single provider condition code with its category and icon family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub code: u16,
    /// Coarse category, e.g. "Rain" or "Clouds".
    pub group: &'static str,
    /// Broader category; currently always equal to `group`.
    pub main: &'static str,
    pub description: &'static str,
    /// Two-digit icon family, without the day/night suffix.
    pub icon_base: &'static str,
}

impl WeatherCondition {
    const fn new(
        code: u16,
        group: &'static str,
        description: &'static str,
        icon_base: &'static str,
    ) -> Self {
        Self { code, group, main: group, description, icon_base }
    }

    /// Icon URL for this condition, `d` or `n` variant depending on `is_day`.
    pub fn icon_url(&self, is_day: bool) -> String {
        let suffix = if is_day { "d" } else { "n" };
        format!("{ICON_URL_BASE}/{}{suffix}@2x.png", self.icon_base)
    }
}

// Sorted by code; lookups binary search this slice.
static CONDITIONS: &[WeatherCondition] = &[
    // 2xx: Thunderstorm
    WeatherCondition::new(200, "Thunderstorm", "thunderstorm with light rain", "11"),
    WeatherCondition::new(201, "Thunderstorm", "thunderstorm with rain", "11"),
    WeatherCondition::new(202, "Thunderstorm", "thunderstorm with heavy rain", "11"),
    WeatherCondition::new(210, "Thunderstorm", "light thunderstorm", "11"),
    WeatherCondition::new(211, "Thunderstorm", "thunderstorm", "11"),
    WeatherCondition::new(212, "Thunderstorm", "heavy thunderstorm", "11"),
    WeatherCondition::new(221, "Thunderstorm", "ragged thunderstorm", "11"),
    WeatherCondition::new(230, "Thunderstorm", "thunderstorm with light drizzle", "11"),
    WeatherCondition::new(231, "Thunderstorm", "thunderstorm with drizzle", "11"),
    WeatherCondition::new(232, "Thunderstorm", "thunderstorm with heavy drizzle", "11"),
    // 3xx: Drizzle
    WeatherCondition::new(300, "Drizzle", "light intensity drizzle", "09"),
    WeatherCondition::new(301, "Drizzle", "drizzle", "09"),
    WeatherCondition::new(302, "Drizzle", "heavy intensity drizzle", "09"),
    WeatherCondition::new(310, "Drizzle", "light intensity drizzle rain", "09"),
    WeatherCondition::new(311, "Drizzle", "drizzle rain", "09"),
    WeatherCondition::new(312, "Drizzle", "heavy intensity drizzle rain", "09"),
    WeatherCondition::new(313, "Drizzle", "shower rain and drizzle", "09"),
    WeatherCondition::new(314, "Drizzle", "heavy shower rain and drizzle", "09"),
    WeatherCondition::new(321, "Drizzle", "shower drizzle", "09"),
    // 5xx: Rain
    WeatherCondition::new(500, "Rain", "light rain", "10"),
    WeatherCondition::new(501, "Rain", "moderate rain", "10"),
    WeatherCondition::new(502, "Rain", "heavy intensity rain", "10"),
    WeatherCondition::new(503, "Rain", "very heavy rain", "10"),
    WeatherCondition::new(504, "Rain", "extreme rain", "10"),
    WeatherCondition::new(511, "Rain", "freezing rain", "13"),
    WeatherCondition::new(520, "Rain", "light intensity shower rain", "09"),
    WeatherCondition::new(521, "Rain", "shower rain", "09"),
    WeatherCondition::new(522, "Rain", "heavy intensity shower rain", "09"),
    WeatherCondition::new(531, "Rain", "ragged shower rain", "09"),
    // 6xx: Snow
    WeatherCondition::new(600, "Snow", "light snow", "13"),
    WeatherCondition::new(601, "Snow", "snow", "13"),
    WeatherCondition::new(602, "Snow", "heavy snow", "13"),
    WeatherCondition::new(611, "Snow", "sleet", "13"),
    WeatherCondition::new(612, "Snow", "light shower sleet", "13"),
    WeatherCondition::new(613, "Snow", "shower sleet", "13"),
    WeatherCondition::new(615, "Snow", "light rain and snow", "13"),
    WeatherCondition::new(616, "Snow", "rain and snow", "13"),
    WeatherCondition::new(620, "Snow", "light shower snow", "13"),
    WeatherCondition::new(621, "Snow", "shower snow", "13"),
    WeatherCondition::new(622, "Snow", "heavy shower snow", "13"),
    // 7xx: Atmosphere
    WeatherCondition::new(701, "Atmosphere", "mist", "50"),
    WeatherCondition::new(711, "Atmosphere", "smoke", "50"),
    WeatherCondition::new(721, "Atmosphere", "haze", "50"),
    WeatherCondition::new(731, "Atmosphere", "sand/dust whirls", "50"),
    WeatherCondition::new(741, "Atmosphere", "fog", "50"),
    WeatherCondition::new(751, "Atmosphere", "sand", "50"),
    WeatherCondition::new(761, "Atmosphere", "dust", "50"),
    WeatherCondition::new(762, "Atmosphere", "volcanic ash", "50"),
    WeatherCondition::new(771, "Atmosphere", "squalls", "50"),
    WeatherCondition::new(781, "Atmosphere", "tornado", "50"),
    // 800: Clear
    WeatherCondition::new(800, "Clear", "clear sky", "01"),
    // 80x: Clouds
    WeatherCondition::new(801, "Clouds", "few clouds: 11-25%", "02"),
    WeatherCondition::new(802, "Clouds", "scattered clouds: 25-50%", "03"),
    WeatherCondition::new(803, "Clouds", "broken clouds: 51-84%", "04"),
    WeatherCondition::new(804, "Clouds", "overcast clouds: 85-100%", "04"),
];

/// Every known condition, ordered by code.
pub fn conditions() -> &'static [WeatherCondition] {
    CONDITIONS
}

/// Exact-match lookup; unknown codes return `None`.
pub fn get_condition(code: u16) -> Option<&'static WeatherCondition> {
    CONDITIONS
        .binary_search_by_key(&code, |c| c.code)
        .ok()
        .and_then(|idx| CONDITIONS.get(idx))
}

pub fn get_group(code: u16) -> Option<&'static str> {
    get_condition(code).map(|c| c.group)
}

/// Icon URL for `code`, or `None` if the code is unknown.
pub fn get_icon_url(code: u16, is_day: bool) -> Option<String> {
    get_condition(code).map(|c| c.icon_url(is_day))
}
