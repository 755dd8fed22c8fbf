use cadence_test::component::grammar::{
    GrammarError, Language, detect, normalize_fr, parse_schedule, parse_schedule_en,
    parse_schedule_fr,
};

const PAIRS: &[(&str, &str)] = &[
    ("tous les jours à 10h", "every day at 10:00"),
    ("Tous les lundis et jeudis à 18h", "every monday and thursday at 18:00"),
    ("Tous les jours ouvrés à 9h", "every weekday at 09:00"),
    ("Chaque samedi à 10h, 14h et 18h", "every saturday at 10:00, 14:00 and 18:00"),
    ("Toutes les 15 minutes", "every 15 minutes"),
    ("Toutes les heures entre 18h et 23h", "every hour between 18:00 and 23:00"),
    ("Toutes les 3 semaines le lundi à 8h30", "every 3 weeks on monday at 08:30"),
    (
        "Tous les jours, toutes les 30 minutes entre 12h et 14h",
        "every day every 30 minutes between 12:00 and 14:00",
    ),
    ("Tous les mois le 1er à 9h", "every month on the 1st at 09:00"),
    ("Tous les mois le dernier vendredi à 18h", "every month on the last friday at 18:00"),
    ("Tous les ans le 03-14 à 10h", "every year on 03-14 at 10:00"),
    (
        "Tous les ans le dernier dimanche d’octobre à 23h",
        "every year on the last sunday of october at 23:00",
    ),
    ("Le 2026-03-13 à 2h", "2026-03-13 at 02:00"),
    ("Tous les jours sauf le mercredi à 10h", "every day except wednesday at 10:00"),
    ("Tous les jours à 10h jusqu'au 2026-12-31", "every day at 10:00 until 2026-12-31"),
    (
        "Tous les mois le 1er à 9h entre le 2026-08-01 et le 2026-08-31, si week-end alors lundi suivant",
        "every month on the 1st at 09:00 between 2026-08-01 and 2026-08-31 if weekend then next monday",
    ),
    ("Tous les jours ouvrés à 9h sauf les jours fériés", "every weekday at 09:00 except public holidays"),
    ("Tous les jours à 10h (America/New_York)", "every day at 10:00 in America/New_York"),
    (
        "Tous les jours ouvrés à 9h, et tous les samedis à 10h30",
        "every weekday at 09:00, and every saturday at 10:30",
    ),
];

#[test_log::test]
fn french_and_english_give_the_same_ir() {
    for (french, english) in PAIRS {
        assert_eq!(normalize_fr(french).as_deref(), Ok(*english), "{french:?}");

        let fr = parse_schedule_fr(french).unwrap_or_else(|err| panic!("{french:?}: {err}"));
        let en = parse_schedule_en(english).unwrap_or_else(|err| panic!("{english:?}: {err}"));
        assert_eq!(fr, en, "{french:?} vs {english:?}");
    }
}

#[test]
fn detection_routes_each_side() {
    for (french, english) in PAIRS {
        assert_eq!(detect(french), Language::Fr, "{french:?}");
        assert_eq!(detect(english), Language::En, "{english:?}");

        let auto = parse_schedule(french).unwrap_or_else(|err| panic!("{french:?}: {err}"));
        assert_eq!(Some(auto), parse_schedule_en(english).ok(), "{french:?}");
    }
}

#[test]
fn unknown_french_is_a_normalization_error() {
    let err = parse_schedule_fr("tous les jours à midi").expect_err("midi is not supported");
    assert!(matches!(err, GrammarError::Normalize(_)));
}
