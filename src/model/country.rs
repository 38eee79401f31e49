use std::fmt;

use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Guest country, offered in a fixed order with its phone dialing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    #[default]
    India,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Germany,
    France,
    Japan,
    China,
    Brazil,
    SouthAfrica,
}

static ALL_COUNTRIES: &[Country] = &[
    Country::India,
    Country::UnitedStates,
    Country::UnitedKingdom,
    Country::Canada,
    Country::Australia,
    Country::Germany,
    Country::France,
    Country::Japan,
    Country::China,
    Country::Brazil,
    Country::SouthAfrica,
];

impl Country {
    /// Returns the display name, which is also the value stored in a draft.
    pub fn name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Japan => "Japan",
            Country::China => "China",
            Country::Brazil => "Brazil",
            Country::SouthAfrica => "South Africa",
        }
    }

    /// Returns the international dialing code, e.g. `+91`.
    ///
    /// Codes are not unique: the United States and Canada share `+1`.
    pub fn dialing_code(&self) -> &'static str {
        match self {
            Country::India => "+91",
            Country::UnitedStates | Country::Canada => "+1",
            Country::UnitedKingdom => "+44",
            Country::Australia => "+61",
            Country::Germany => "+49",
            Country::France => "+33",
            Country::Japan => "+81",
            Country::China => "+86",
            Country::Brazil => "+55",
            Country::SouthAfrica => "+27",
        }
    }

    /// Returns all countries in display order.
    pub fn all() -> &'static [Country] {
        ALL_COUNTRIES
    }
}

impl Choice for Country {
    fn all() -> &'static [Self] {
        ALL_COUNTRIES
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

#[mutants::skip]
impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialing_codes_all_countries() {
        let expected = [
            (Country::India, "+91"),
            (Country::UnitedStates, "+1"),
            (Country::UnitedKingdom, "+44"),
            (Country::Canada, "+1"),
            (Country::Australia, "+61"),
            (Country::Germany, "+49"),
            (Country::France, "+33"),
            (Country::Japan, "+81"),
            (Country::China, "+86"),
            (Country::Brazil, "+55"),
            (Country::SouthAfrica, "+27"),
        ];
        for (country, code) in expected {
            assert_eq!(country.dialing_code(), code, "{country:?} code mismatch");
        }
    }

    #[test]
    fn all_returns_11_countries() {
        assert_eq!(Country::all().len(), 11);
    }

    #[test]
    fn all_starts_with_india_ends_with_south_africa() {
        assert_eq!(Country::all().first(), Some(&Country::India));
        assert_eq!(Country::all().last(), Some(&Country::SouthAfrica));
    }

    #[test]
    fn default_is_india() {
        assert_eq!(Country::default(), Country::India);
    }

    #[test]
    fn from_label_round_trips_every_country() {
        for country in Country::all() {
            assert_eq!(Country::from_label(country.name()), Some(*country));
        }
    }

    #[test]
    fn from_label_unknown_is_none() {
        assert_eq!(Country::from_label("Atlantis"), None);
        assert_eq!(Country::from_label("india"), None);
        assert_eq!(Country::from_label(""), None);
    }
}
