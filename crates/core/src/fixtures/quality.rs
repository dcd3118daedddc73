use super::utc;
use fhir::{
    AnswerValue, Questionnaire, QuestionnaireItem, QuestionnaireResponse,
    QuestionnaireResponseItem, Reference, ResourceType,
};

const PRESSURE_INJURY_QUESTIONS: [&str; 4] = [
    "Number of residents who have developed a Stage 1 pressure injury during the quarter",
    "Number of residents who have developed a Stage 2 pressure injury during the quarter",
    "Number of residents who have developed a Stage 3 pressure injury during the quarter",
    "Number of residents who have developed a Stage 4 pressure injury during the quarter",
];

const PRESSURE_INJURY_COMMENTS: &str = "Any comments on pressure injuries data collection?";

fn question(link_id: &str, text: &str, item_type: &str, required: bool) -> QuestionnaireItem {
    QuestionnaireItem {
        link_id: link_id.to_owned(),
        text: text.to_owned(),
        item_type: item_type.to_owned(),
        required,
        ..Default::default()
    }
}

fn integer(link_id: &str, text: &str) -> QuestionnaireItem {
    question(link_id, text, "integer", true)
}

fn comments(link_id: &str, text: &str) -> QuestionnaireItem {
    question(link_id, text, "string", false)
}

fn group(link_id: &str, text: &str, item: Vec<QuestionnaireItem>) -> QuestionnaireItem {
    QuestionnaireItem {
        item,
        ..question(link_id, text, "group", true)
    }
}

pub(super) fn questionnaires() -> Vec<Questionnaire> {
    let mut pressure_injuries: Vec<QuestionnaireItem> = PRESSURE_INJURY_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| integer(&format!("PI-0{}", i + 1), text))
        .collect();
    pressure_injuries.push(comments("PI-05", PRESSURE_INJURY_COMMENTS));

    vec![Questionnaire {
        resource_type: ResourceType::Questionnaire,
        id: "QC-20230630".to_owned(),
        name: "quality-indicators-q4-2022-23".to_owned(),
        title: "Quality Indicators Q4 2022-23".to_owned(),
        status: "active".to_owned(),
        subject: None,
        date: "2023-06-30".to_owned(),
        publisher: "Department of Health and Aged Care".to_owned(),
        description: "Quality indicators questionnaire for Q4 2022-23".to_owned(),
        item: vec![
            group("pressure-injuries", "Pressure Injuries", pressure_injuries),
            group(
                "physical-restraint",
                "Physical Restraint",
                vec![
                    integer(
                        "PR-01",
                        "Number of residents who were physically restrained during the quarter",
                    ),
                    comments("PR-02", "Any comments on physical restraint data collection?"),
                ],
            ),
            group(
                "unplanned-weight-loss",
                "Unplanned Weight Loss",
                vec![
                    integer(
                        "UPWL-01",
                        "Number of residents who experienced unplanned weight loss during the quarter",
                    ),
                    integer(
                        "UPWL-02",
                        "Number of residents who experienced consecutive unplanned weight loss",
                    ),
                    comments(
                        "UPWL-03",
                        "Any comments on unplanned weight loss data collection?",
                    ),
                ],
            ),
            group(
                "falls-and-major-injury",
                "Falls and Major Injury",
                vec![
                    integer(
                        "FMI-01",
                        "Number of residents who experienced a fall during the quarter",
                    ),
                    integer(
                        "FMI-02",
                        "Number of residents who experienced a fall resulting in major injury",
                    ),
                    comments(
                        "FMI-03",
                        "Any comments on falls and major injury data collection?",
                    ),
                ],
            ),
            group(
                "medication-management",
                "Medication Management",
                vec![
                    integer(
                        "MM-01",
                        "Number of residents who were prescribed antipsychotic medications",
                    ),
                    integer(
                        "MM-02",
                        "Number of residents who experienced a significant medication error",
                    ),
                    comments(
                        "MM-03",
                        "Any comments on medication management data collection?",
                    ),
                ],
            ),
        ],
    }]
}

pub(super) fn responses() -> Vec<QuestionnaireResponse> {
    let answered = |link_id: &str, text: &str, answer: AnswerValue| QuestionnaireResponseItem {
        link_id: link_id.to_owned(),
        text: text.to_owned(),
        answer: vec![answer],
        item: Vec::new(),
    };

    let mut pressure_injuries: Vec<QuestionnaireResponseItem> = PRESSURE_INJURY_QUESTIONS
        .iter()
        .zip([2, 1, 0, 0])
        .enumerate()
        .map(|(i, (text, count))| {
            answered(&format!("PI-0{}", i + 1), text, AnswerValue::Integer(count))
        })
        .collect();
    pressure_injuries.push(answered(
        "PI-05",
        PRESSURE_INJURY_COMMENTS,
        AnswerValue::String("Improved prevention measures implemented in this quarter.".into()),
    ));

    vec![QuestionnaireResponse {
        resource_type: ResourceType::QuestionnaireResponse,
        id: "QR-12345".to_owned(),
        questionnaire: "QC-20230630".to_owned(),
        status: "completed".to_owned(),
        subject: Reference::to(
            ResourceType::HealthcareService,
            "SVC-54321",
            "Sunset Residential Care",
        ),
        authored_on: Some(utc(2023, 7, 15, 10, 30)),
        author: Some(Reference::to(
            ResourceType::Organization,
            "PRV-12345",
            "Sunset Aged Care",
        )),
        item: vec![QuestionnaireResponseItem {
            link_id: "pressure-injuries".to_owned(),
            text: "Pressure Injuries".to_owned(),
            answer: Vec::new(),
            item: pressure_injuries,
        }],
    }]
}
