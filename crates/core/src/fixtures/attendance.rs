use super::{concept, utc};
use crate::constants::{ENCOUNTER_REASON_SYSTEM, RN_ATTENDANCE_SYSTEM};
use fhir::{
    AttendanceSummary, Identifier, Period, Reference, RegisteredNurseAttendance, ResourceType,
};

struct ShiftSeed {
    id: &'static str,
    service_id: &'static str,
    service_name: &'static str,
    start_hour: u32,
    end_hour: u32,
    nurse_id: &'static str,
    nurse_name: &'static str,
    reason: &'static str,
}

const SHIFTS: [ShiftSeed; 3] = [
    ShiftSeed {
        id: "RN-12345",
        service_id: "SVC-54321",
        service_name: "Sunset Residential Care",
        start_hour: 7,
        end_hour: 15,
        nurse_id: "RN-P12345",
        nurse_name: "Jane Smith",
        reason: "Regular shift",
    },
    ShiftSeed {
        id: "RN-23456",
        service_id: "SVC-54321",
        service_name: "Sunset Residential Care",
        start_hour: 15,
        end_hour: 23,
        nurse_id: "RN-P67890",
        nurse_name: "John Doe",
        reason: "Evening shift",
    },
    ShiftSeed {
        id: "RN-34567",
        service_id: "SVC-24680",
        service_name: "Golden Years Residential Care",
        start_hour: 7,
        end_hour: 15,
        nurse_id: "RN-P13579",
        nurse_name: "Emily Johnson",
        reason: "Morning shift",
    },
];

pub(super) fn attendances() -> Vec<RegisteredNurseAttendance> {
    SHIFTS
        .iter()
        .map(|shift| {
            let mut reason = concept(ENCOUNTER_REASON_SYSTEM, "routine", "Routine");
            reason.text = shift.reason.to_owned();

            RegisteredNurseAttendance {
                resource_type: ResourceType::Encounter,
                id: shift.id.to_owned(),
                identifier: vec![Identifier::new(RN_ATTENDANCE_SYSTEM, shift.id)],
                status: "finished".to_owned(),
                subject: Reference::to(
                    ResourceType::HealthcareService,
                    shift.service_id,
                    shift.service_name,
                ),
                period: Some(Period {
                    start: utc(2023, 7, 1, shift.start_hour, 0),
                    end: Some(utc(2023, 7, 1, shift.end_hour, 0)),
                }),
                performer: vec![Reference {
                    reference: format!("Practitioner/{}", shift.nurse_id),
                    display: shift.nurse_name.to_owned(),
                }],
                reason_code: vec![reason],
                note: Vec::new(),
            }
        })
        .collect()
}

pub(super) fn summaries() -> Vec<AttendanceSummary> {
    let summary = |id: &str, service_id: &str, service_name: &str, total_hours: f64| {
        AttendanceSummary {
            id: id.to_owned(),
            service_id: service_id.to_owned(),
            service_name: service_name.to_owned(),
            date: utc(2023, 7, 1, 0, 0),
            total_hours,
            daily_required: true,
            compliant_day: true,
            compliant_week: true,
            compliant_month: true,
        }
    };

    vec![
        summary("SUM-12345", "SVC-54321", "Sunset Residential Care", 16.0),
        summary("SUM-23456", "SVC-24680", "Golden Years Residential Care", 8.0),
    ]
}
