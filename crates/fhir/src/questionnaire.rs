//! Quality indicator questionnaires and the responses providers submit against them.
//!
//! Both item trees are recursive: `group` items hold child items to any depth, and a
//! response mirrors the shape of the questionnaire it answers.

use crate::datatypes::{Reference, ResourceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn questionnaire() -> ResourceType {
    ResourceType::Questionnaire
}

fn questionnaire_response() -> ResourceType {
    ResourceType::QuestionnaireResponse
}

/// A typed answer value. Exactly one of the `value[x]` members is present on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum AnswerValue {
    #[serde(rename = "valueInteger")]
    Integer(i64),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
}

/// Condition under which an item is shown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnableWhen {
    pub question: String,
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_boolean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_integer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_string: Option<String>,
}

/// A question or group of questions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
    pub link_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answer_option: Vec<AnswerValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enable_when: Vec<EnableWhen>,
}

/// A published quality indicator form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    #[serde(default = "questionnaire")]
    pub resource_type: ResourceType,
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    /// Publication date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub item: Vec<QuestionnaireItem>,
}

/// An answered item, mirroring a [`QuestionnaireItem`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseItem {
    pub link_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answer: Vec<AnswerValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireResponseItem>,
}

/// A completed quality indicator submission.
///
/// Every member defaults when absent so that incoming submissions can be decoded first and
/// validated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    #[serde(default = "questionnaire_response")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub id: String,
    /// Id of the questionnaire being answered.
    #[serde(default)]
    pub questionnaire: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subject: Reference,
    #[serde(rename = "authored", default, skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,
    #[serde(default)]
    pub item: Vec<QuestionnaireResponseItem>,
}

impl QuestionnaireResponse {
    /// Depth-first search for the answered item with `link_id`.
    pub fn find_item(&self, link_id: &str) -> Option<&QuestionnaireResponseItem> {
        fn walk<'a>(
            items: &'a [QuestionnaireResponseItem],
            link_id: &str,
        ) -> Option<&'a QuestionnaireResponseItem> {
            items.iter().find_map(|item| {
                if item.link_id == link_id {
                    Some(item)
                } else {
                    walk(&item.item, link_id)
                }
            })
        }

        walk(&self.item, link_id)
    }
}
