use chrono::{TimeZone, Utc};
use examsync_core::models::{
    Assignment, CreateBatchRequest, ProposedTime, RescheduleRequest,
};
use pretty_assertions::assert_eq;
use serde_json::{from_str, from_value, json, to_string, to_value};
use uuid::Uuid;

#[test]
fn assignment_round_trips_with_camel_case_keys() {
    let assignment = Assignment {
        id: Uuid::new_v4(),
        examiner_id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        module: "CS101".to_string(),
        event_id: Some(Uuid::new_v4()),
        start_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).unwrap(),
        meeting_link: "https://meet.google.com/exam-1".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let json = to_string(&assignment).expect("Failed to serialize assignment");
    assert!(json.contains("\"examinerId\""));
    assert!(json.contains("\"studentId\""));
    assert!(json.contains("\"startTime\""));
    assert!(json.contains("\"meetingLink\""));

    let deserialized: Assignment = from_str(&json).expect("Failed to deserialize assignment");
    assert_eq!(deserialized, assignment);
}

#[test]
fn proposed_time_accepts_a_bare_timestamp() {
    let proposed: ProposedTime = from_str("\"2025-03-10T09:00:00Z\"").unwrap();

    assert_eq!(
        proposed,
        ProposedTime::Instant(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap())
    );
}

#[test]
fn proposed_time_accepts_a_date_with_times() {
    let proposed: ProposedTime = from_value(json!({
        "date": "2025-03-10T00:00:00Z",
        "startTime": "09:00",
        "endTime": "10:00"
    }))
    .unwrap();

    assert_eq!(
        proposed,
        ProposedTime::DateAndTimes {
            date: Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap(),
            start_time: "09:00".to_string(),
            end_time: Some("10:00".to_string()),
        }
    );
}

#[test]
fn proposed_time_end_is_optional() {
    let proposed: ProposedTime = from_value(json!({
        "date": "2025-03-10T00:00:00Z",
        "startTime": "09:00"
    }))
    .unwrap();

    assert!(matches!(
        proposed,
        ProposedTime::DateAndTimes { end_time: None, .. }
    ));
}

#[test]
fn proposed_time_accepts_a_bare_date() {
    // Date pickers submit `date` without any time component.
    let proposed: ProposedTime = from_value(json!({
        "date": "2025-03-10",
        "startTime": "09:00",
        "endTime": "10:00"
    }))
    .unwrap();

    assert_eq!(
        proposed,
        ProposedTime::DateAndTimes {
            date: Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap(),
            start_time: "09:00".to_string(),
            end_time: Some("10:00".to_string()),
        }
    );
}

#[test]
fn proposed_time_accepts_an_offsetless_date_timestamp() {
    let proposed: ProposedTime = from_value(json!({
        "date": "2025-03-10T00:00:00",
        "startTime": "09:00"
    }))
    .unwrap();

    assert!(matches!(
        proposed,
        ProposedTime::DateAndTimes { date, .. }
            if date == Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap()
    ));
}

#[test]
fn proposed_time_rejects_unsupported_shapes() {
    assert!(from_value::<ProposedTime>(json!({ "date": "2025-03-10T00:00:00Z" })).is_err());
    assert!(from_value::<ProposedTime>(json!(42)).is_err());
    assert!(from_value::<ProposedTime>(json!(["2025-03-10T09:00:00Z"])).is_err());
}

#[test]
fn create_batch_request_parses_the_wire_shape() {
    let examiner = Uuid::new_v4();
    let request: CreateBatchRequest = from_value(json!({
        "startDate": "2025-03-10T08:00:00Z",
        "endDate": "2025-03-12T18:00:00Z",
        "duration": 30,
        "module": "CS101",
        "examinerIds": [examiner]
    }))
    .unwrap();

    assert_eq!(request.module, "CS101");
    assert_eq!(request.duration, 30);
    assert_eq!(request.examiner_ids, vec![examiner]);
    assert_eq!(request.event_id, None);
}

#[test]
fn reschedule_request_carries_either_proposed_shape() {
    let examiner = Uuid::new_v4();
    let student = Uuid::new_v4();

    let with_string: RescheduleRequest = from_value(json!({
        "proposedTime": "2025-03-10T09:00:00Z",
        "examinerId": examiner,
        "studentId": student
    }))
    .unwrap();
    assert!(matches!(with_string.proposed_time, ProposedTime::Instant(_)));

    let with_object: RescheduleRequest = from_value(json!({
        "proposedTime": { "date": "2025-03-10T00:00:00Z", "startTime": "09:00" },
        "examinerId": examiner,
        "studentId": student
    }))
    .unwrap();
    assert!(matches!(
        with_object.proposed_time,
        ProposedTime::DateAndTimes { .. }
    ));

    let value = to_value(&with_string).unwrap();
    assert!(value.get("examinerId").is_some());
}
