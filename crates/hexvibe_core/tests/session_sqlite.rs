use chrono::{TimeZone, Utc};
use hexvibe_core::{
    AiApplied, AiOutcome, Appearance, HarmonyRule, HexColor, PaletteSession, SqliteStorage, Storage,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn session_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let saved = {
        let storage = SqliteStorage::open(dir.path()).unwrap();
        let mut session = PaletteSession::open(storage, &mut rng);
        session.toggle_appearance().unwrap();
        session.apply_harmony(HarmonyRule::Monochromatic, &mut rng);
        session.save_current(now).unwrap()
    };

    let storage = SqliteStorage::open(dir.path()).unwrap();
    let mut session = PaletteSession::open(storage, &mut rng);
    assert_eq!(session.appearance(), Appearance::Dark);
    assert_eq!(session.history(), &[saved.clone()]);

    session.load_saved(&saved.id, &mut rng).unwrap();
    assert_eq!(session.palette().colors(), saved.colors);
}

#[test]
fn ai_round_trip_through_boxed_storage() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let storage: Box<dyn Storage + Send> = Box::new(SqliteStorage::open(dir.path()).unwrap());
    let mut session = PaletteSession::open(storage, &mut rng);

    let prompt = session.begin_ai_request("deep ocean").unwrap();
    assert_eq!(prompt, "deep ocean");
    let colors: Vec<HexColor> = ["#001F3F", "#0074D9", "#7FDBFF", "#39CCCC", "#3D9970"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let applied = session.finish_ai_request(AiOutcome::Success(colors.clone()), now).unwrap();

    assert!(matches!(applied, AiApplied::Applied { .. }));
    assert_eq!(session.palette().colors(), colors);
    assert_eq!(session.history().len(), 1);
    assert!(dir.path().join("hexvibe.db").exists());
    assert!(dir.path().join("exports").is_dir());
}
