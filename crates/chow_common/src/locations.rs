//! Nigerian states, LGAs and delivery areas with store coverage.

/// One LGA and the neighbourhoods it covers
#[derive(Debug, Clone, Copy)]
pub struct Lga {
    pub name: &'static str,
    pub areas: &'static [&'static str],
}

/// One state and its LGAs, in display order
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub name: &'static str,
    pub code: &'static str,
    pub lgas: &'static [Lga],
}

const fn lga(name: &'static str, areas: &'static [&'static str]) -> Lga {
    Lga { name, areas }
}

pub static STATES: &[State] = &[
    State {
        name: "Lagos",
        code: "LAG",
        lgas: &[
            lga("Ikeja", &["Ikeja GRA", "Allen Avenue", "Alausa", "Ogba"]),
            lga("Eti-Osa", &["Lekki", "Victoria Island", "Ikoyi", "Ajah", "Chevron"]),
            lga("Lagos Mainland", &["Yaba", "Ebute Metta", "Sabo"]),
            lga("Surulere", &["Surulere", "Shitta", "Adeniran Ogunsanya"]),
            lga("Kosofe", &["Gbagada", "Ogudu", "Maryland", "Ketu"]),
            lga("Oshodi-Isolo", &["Oshodi", "Isolo", "Ejigbo"]),
            lga("Mushin", &["Mushin", "Idi-Oro"]),
            lga("Shomolu", &["Shomolu", "Bariga"]),
            lga("Amuwo-Odofin", &["Festac", "Amuwo Odofin"]),
            lga("Alimosho", &["Egbeda", "Ikotun", "Iyana Ipaja"]),
        ],
    },
    State {
        name: "FCT",
        code: "FCT",
        lgas: &[
            lga(
                "Abuja Municipal",
                &[
                    "Wuse", "Garki", "Maitama", "Asokoro", "Central Area", "Gwarinpa", "Jabi",
                    "Utako", "Kubwa", "Kado", "Wuye",
                ],
            ),
            lga("Gwagwalada", &["Gwagwalada"]),
            lga("Kuje", &["Kuje"]),
            lga("Abaji", &["Abaji"]),
        ],
    },
    State {
        name: "Oyo",
        code: "OYO",
        lgas: &[
            lga("Ibadan North", &["Bodija", "Agodi", "Mokola"]),
            lga("Ibadan South-West", &["Ring Road", "Oke-Ado"]),
            lga("Ibadan North-East", &["Iwo Road", "Sango"]),
            lga("Ibadan South-East", &["Mapo", "Beere"]),
        ],
    },
    State {
        name: "Rivers",
        code: "RIV",
        lgas: &[
            lga("Port Harcourt", &["GRA", "Trans Amadi", "Rumuola", "D-Line"]),
            lga("Obio-Akpor", &["Rumuokoro", "Choba", "Eliozu"]),
        ],
    },
    State {
        name: "Edo",
        code: "EDO",
        lgas: &[
            lga("Oredo", &["Ring Road", "Ugbowo", "Uselu"]),
            lga("Egor", &["Uselu", "Ugbor"]),
        ],
    },
    State {
        name: "Delta",
        code: "DEL",
        lgas: &[lga("Oshimili South", &["Asaba", "Cable Point"])],
    },
    State {
        name: "Ogun",
        code: "OGU",
        lgas: &[lga("Abeokuta South", &["Oke-Ilewo", "Isale Igbein"])],
    },
    State {
        name: "Kaduna",
        code: "KAD",
        lgas: &[
            lga("Kaduna North", &["Kaduna North"]),
            lga("Kaduna South", &["Kaduna South"]),
        ],
    },
    State {
        name: "Enugu",
        code: "ENU",
        lgas: &[lga("Enugu North", &["GRA", "Independence Layout"])],
    },
];

fn find_state(state: &str) -> Option<&'static State> {
    let state = state.trim();
    STATES.iter().find(|s| s.name.eq_ignore_ascii_case(state))
}

/// State names in table order
pub fn all_states() -> Vec<&'static str> {
    STATES.iter().map(|s| s.name).collect()
}

/// Canonical spelling of a state name, matched case-insensitively
pub fn canonical_state(state: &str) -> Option<&'static str> {
    find_state(state).map(|s| s.name)
}

/// LGAs of a state, or `None` when the state is not covered
pub fn lgas_for_state(state: &str) -> Option<Vec<&'static str>> {
    find_state(state).map(|s| s.lgas.iter().map(|l| l.name).collect())
}

/// Areas within an LGA; empty when either key is unknown
pub fn areas_for_lga(state: &str, lga: &str) -> Vec<&'static str> {
    find_state(state)
        .and_then(|s| s.lgas.iter().find(|l| l.name.eq_ignore_ascii_case(lga.trim())))
        .map(|l| l.areas.to_vec())
        .unwrap_or_default()
}

/// The first LGA listed for a state
pub fn primary_lga(state: &str) -> Option<&'static str> {
    find_state(state).and_then(|s| s.lgas.first()).map(|l| l.name)
}

/// Store listing page for an area
pub fn store_url_for_area(area: &str) -> String {
    format!(
        "https://chowdeck.com/store/{}",
        area.trim().to_lowercase().replace(' ', "-")
    )
}
