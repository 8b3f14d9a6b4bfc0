/// Turkish Sign Language (TID) gloss vocabulary.
///
/// The order is part of the API contract: `/glosses` returns the list
/// exactly as written here, and the mock predictor draws indices into it.
pub const GLOSSES: [&str; 29] = [
    "merhaba",
    "teşekkür",
    "ederim",
    "günaydın",
    "iyi",
    "akşamlar",
    "görüşürüz",
    "evet",
    "hayır",
    "lütfen",
    "özür",
    "dilerim",
    "nasılsın",
    "iyiyim",
    "su",
    "yemek",
    "ev",
    "okul",
    "iş",
    "araba",
    "kitap",
    "telefon",
    "anne",
    "baba",
    "kardeş",
    "arkadaş",
    "öğretmen",
    "doktor",
    "polis",
];

/// Returned instead of a vocabulary entry when the predictor decides no
/// sign is present in the frame.
pub const NO_SIGN_SENTINEL: &str = "no_sign_detected";

pub fn contains(label: &str) -> bool {
    GLOSSES.iter().any(|g| *g == label)
}
