use chrono::TimeDelta;
use std::fs;

mod common;
use common::{local, open_store, setup_data_file};
use timeclock::core::PunchLogic;
use timeclock::errors::AppError;
use timeclock::models::PunchState;
use timeclock::store::RecordStore;
use timeclock::utils::format_hours;

#[test]
fn test_empty_store_is_out() {
    let path = setup_data_file("punch_empty_status");
    let store = open_store(&path);

    assert_eq!(PunchLogic::status(&store), PunchState::Out);
}

#[test]
fn test_punch_in_then_out_records_one_hour() {
    let path = setup_data_file("punch_in_out_hour");
    let mut store = open_store(&path);
    let start = local(2025, 6, 16, 9, 0);

    PunchLogic::punch_in(&mut store, start).expect("punch in");
    assert_eq!(PunchLogic::status(&store), PunchState::In);

    let rec = PunchLogic::punch_out(&mut store, start + TimeDelta::seconds(3600))
        .expect("punch out");
    assert_eq!(PunchLogic::status(&store), PunchState::Out);

    assert_eq!(store.records().len(), 1);
    assert_eq!(rec.duration(start), TimeDelta::seconds(3600));
    assert_eq!(format_hours(rec.duration(start)), "1.00");

    // persisted
    let on_disk = RecordStore::load(&path).expect("reload");
    assert_eq!(on_disk, store.records());
}

#[test]
fn test_punch_in_persists_open_record_first() {
    let path = setup_data_file("punch_in_front");
    fs::write(&path, "1750057200,1750086000\n").unwrap();
    let mut store = open_store(&path);

    let at = local(2025, 6, 17, 9, 0);
    PunchLogic::punch_in(&mut store, at).expect("punch in");

    let on_disk = RecordStore::load(&path).expect("reload");
    assert_eq!(on_disk.len(), 2);
    assert!(on_disk[0].is_open());
    assert_eq!(on_disk[0].check_in, at);
    assert!(!on_disk[1].is_open());
}

#[test]
fn test_punch_in_twice_fails_without_mutation() {
    let path = setup_data_file("punch_in_twice");
    let mut store = open_store(&path);
    let at = local(2025, 6, 16, 9, 0);

    PunchLogic::punch_in(&mut store, at).expect("punch in");
    let before = fs::read_to_string(&path).unwrap();

    let err = PunchLogic::punch_in(&mut store, at + TimeDelta::hours(1)).unwrap_err();

    assert!(matches!(err, AppError::AlreadyPunchedIn));
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.newest().unwrap().check_in, at);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_punch_out_when_out_fails_without_mutation() {
    let path = setup_data_file("punch_out_when_out");
    fs::write(&path, "1750057200,1750086000\n").unwrap();
    let mut store = open_store(&path);
    let snapshot = store.records().to_vec();

    let err = PunchLogic::punch_out(&mut store, local(2025, 6, 17, 9, 0)).unwrap_err();

    assert!(matches!(err, AppError::NotPunchedIn));
    assert_eq!(store.records(), snapshot.as_slice());

    // an empty log is OUT as well
    let path = setup_data_file("punch_out_empty");
    let mut store = open_store(&path);
    let err = PunchLogic::punch_out(&mut store, local(2025, 6, 17, 9, 0)).unwrap_err();
    assert!(matches!(err, AppError::NotPunchedIn));
    assert!(store.records().is_empty());
}

#[test]
fn test_punch_out_before_check_in_is_rejected() {
    let path = setup_data_file("punch_out_before_in");
    let mut store = open_store(&path);
    let at = local(2025, 6, 16, 9, 0);

    PunchLogic::punch_in(&mut store, at).expect("punch in");
    let before = fs::read_to_string(&path).unwrap();

    let err = PunchLogic::punch_out(&mut store, at - TimeDelta::minutes(1)).unwrap_err();

    assert!(matches!(err, AppError::InvalidPunchOutTime { .. }));
    let newest = store.newest().unwrap();
    assert!(newest.is_open());
    assert_eq!(newest.check_in, at);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_punch_out_at_check_in_is_allowed() {
    let path = setup_data_file("punch_out_zero_length");
    let mut store = open_store(&path);
    let at = local(2025, 6, 16, 9, 0);

    PunchLogic::punch_in(&mut store, at).expect("punch in");
    let rec = PunchLogic::punch_out(&mut store, at).expect("punch out");

    assert_eq!(rec.check_out, Some(at));
}

#[test]
fn test_at_most_one_open_record_and_it_is_newest() {
    let path = setup_data_file("punch_invariant");
    let mut store = open_store(&path);
    let mut t = local(2025, 6, 16, 8, 0);

    for _ in 0..5 {
        PunchLogic::punch_in(&mut store, t).expect("punch in");
        t += TimeDelta::hours(2);
        PunchLogic::punch_out(&mut store, t).expect("punch out");
        t += TimeDelta::minutes(30);
    }
    PunchLogic::punch_in(&mut store, t).expect("final punch in");

    let records = RecordStore::load(&path).expect("reload");
    let open: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_open())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(open, vec![0]);
    assert_eq!(records.len(), 6);
    assert!(records.windows(2).all(|w| w[0].check_in > w[1].check_in));
}
