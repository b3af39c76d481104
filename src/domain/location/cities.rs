/// Cities and districts where MindWell accepts signups.
pub const EGYPTIAN_CITIES: &[&str] = &[
    "Cairo",
    "New Cairo",
    "Nasr City",
    "Heliopolis",
    "El Maadi",
    "Maadi",
    "Zamalek",
    "Mokattam",
    "Helwan",
    "Shubra",
    "Shubra El Kheima",
    "El Obour",
    "El Shorouk",
    "Badr",
    "10th of Ramadan City",
    "Giza",
    "6th of October City",
    "Sheikh Zayed City",
    "Haram",
    "Dokki",
    "Mohandessin",
    "Imbaba",
    "Alexandria",
    "Borg El Arab",
    "Port Said",
    "Suez",
    "Ismailia",
    "Damietta",
    "New Damietta",
    "Mansoura",
    "Tanta",
    "El Mahalla El Kubra",
    "Zagazig",
    "Banha",
    "Shibin El Kom",
    "Kafr El Sheikh",
    "Damanhur",
    "Faiyum",
    "Beni Suef",
    "Minya",
    "Asyut",
    "Sohag",
    "Qena",
    "Luxor",
    "Aswan",
    "Hurghada",
    "Safaga",
    "Marsa Alam",
    "Sharm El Sheikh",
    "Dahab",
    "El Tor",
    "Arish",
    "Marsa Matruh",
    "El Alamein",
    "Kharga",
];

/// Look up `city` in the allow-list, ignoring case and surrounding whitespace.
pub fn canonical_city(city: &str) -> Option<&'static str> {
    let needle = city.trim();
    EGYPTIAN_CITIES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_has_no_case_duplicates() {
        for (i, a) in EGYPTIAN_CITIES.iter().enumerate() {
            for b in &EGYPTIAN_CITIES[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate city {a}");
            }
        }
    }

    #[test]
    fn lookup_returns_canonical_spelling() {
        assert_eq!(canonical_city("giza"), Some("Giza"));
        assert_eq!(canonical_city("Atlantis"), None);
    }
}
