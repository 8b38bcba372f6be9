//! JSON transformers.

use std::collections::HashMap;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::ResultTransform;
use crate::jsonpath;
use crate::{HttpResult, Result, ResultActions, from_json};

/// Transformers over the whole JSON body.
#[must_use]
pub const fn json() -> JsonTransformer {
    JsonTransformer { expression: None }
}

/// Transformers over the value at `expression` in the JSON body.
#[must_use]
pub fn json_path(expression: impl Into<String>) -> JsonTransformer {
    JsonTransformer {
        expression: Some(expression.into()),
    }
}

/// JSON transformations, optionally scoped to a JSONPath expression.
#[derive(Debug, Clone, Default)]
pub struct JsonTransformer {
    expression: Option<String>,
}

impl JsonTransformer {
    /// The scoping expression, if any.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// The JSON value this transformer works on.
    fn target(&self, content: &str) -> Result<Value> {
        match &self.expression {
            Some(expression) => jsonpath::read_required(content, expression),
            None => jsonpath::parse_document(content),
        }
    }

    /// Text of the target: the body itself, or the textual form of the node.
    fn target_text(&self, content: &str) -> Result<String> {
        match &self.expression {
            Some(expression) => Ok(jsonpath::to_text(&jsonpath::read_required(
                content, expression,
            )?)),
            None => Ok(content.to_string()),
        }
    }

    /// The target as a JSON value.
    #[must_use]
    pub fn value(self) -> impl ResultTransform<Value> {
        move |result: &HttpResult| self.target(result.response_string_content())
    }

    /// The target deserialized into `T`.
    ///
    /// With an expression, the textual form of the node is parsed first. If
    /// that fails the node itself is deserialized, so a string node can be
    /// read as a `String` and a string holding JSON as the structure it
    /// encodes.
    #[must_use]
    pub fn object<T>(self) -> impl ResultTransform<T>
    where
        T: DeserializeOwned,
    {
        move |result: &HttpResult| {
            let content = result.response_string_content();
            let Some(expression) = &self.expression else {
                return from_json::<T>(content.as_bytes());
            };

            let node = jsonpath::read_required(content, expression)?;
            let text = jsonpath::to_text(&node);
            from_json::<T>(text.as_bytes()).or_else(|err| {
                debug!(%expression, error = %err, "reading the JSON path node as-is");
                serde_json::from_value(node).map_err(|_| err)
            })
        }
    }

    /// The target deserialized into a list of `T`.
    #[must_use]
    pub fn list<T>(self) -> impl ResultTransform<Vec<T>>
    where
        T: DeserializeOwned,
    {
        move |result: &HttpResult| {
            let text = self.target_text(result.response_string_content())?;
            from_json::<Vec<T>>(text.as_bytes())
        }
    }

    /// The target deserialized into a map.
    #[must_use]
    pub fn map<K, V>(self) -> impl ResultTransform<HashMap<K, V>>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        move |result: &HttpResult| {
            let text = self.target_text(result.response_string_content())?;
            from_json::<HashMap<K, V>>(text.as_bytes())
        }
    }

    /// Continue the pipeline on the node at `expression`.
    ///
    /// The new pipeline keeps the request, response and timing; its string
    /// content is the textual form of the node.
    #[must_use]
    pub fn parse(self, expression: impl Into<String>) -> impl ResultTransform<ResultActions> {
        let expression = expression.into();
        move |result: &HttpResult| {
            let document = self.target(result.response_string_content())?;
            let node = jsonpath::read_value(&document, &expression)?
                .ok_or_else(|| crate::Error::json_path(&expression, "no value at path"))?;
            Ok::<_, crate::Error>(ResultActions::new(
                result.with_content(jsonpath::to_text(&node)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::matchers::fixtures::result;
    use crate::matchers::json_path as json_path_matcher;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Student {
        name: String,
        grade: u32,
    }

    const SCHOOL: &str = r#"{
        "school": "North",
        "principal": {"name": "Zoe", "grade": 9},
        "students": [{"name": "Ann", "grade": 3}, {"name": "Bob", "grade": 4}],
        "grades": {"Ann": 3, "Bob": 4},
        "embedded": "{\"name\":\"Eve\",\"grade\":5}"
    }"#;

    fn school() -> HttpResult {
        result(200, "application/json", SCHOOL)
    }

    #[test]
    fn whole_body_as_value() {
        let value = json().value().transform(&school()).expect("value");
        check!(value["school"] == json!("North"));
    }

    #[test]
    fn whole_body_as_object() {
        let body = result(200, "application/json", r#"{"name":"Ann","grade":3,"extra":true}"#);
        let student: Student = json().object().transform(&body).expect("student");
        check!(student == Student { name: "Ann".into(), grade: 3 });
    }

    #[test]
    fn object_at_path() {
        let principal: Student = json_path("$.principal")
            .object()
            .transform(&school())
            .expect("principal");
        check!(principal.name == "Zoe");
    }

    #[test]
    fn object_falls_back_to_the_node() {
        let school_name: String = json_path("$.school")
            .object()
            .transform(&school())
            .expect("name");
        check!(school_name == "North");

        let embedded: Student = json_path("$.embedded")
            .object()
            .transform(&school())
            .expect("embedded student");
        check!(embedded == Student { name: "Eve".into(), grade: 5 });
    }

    #[test]
    fn object_reports_the_parse_error() {
        let_assert!(Err(err) = json_path("$.school").object::<Student>().transform(&school()));
        check!(!err.is_assertion());
    }

    #[test]
    fn list_and_map() {
        let students: Vec<Student> = json_path("$.students")
            .list()
            .transform(&school())
            .expect("students");
        check!(students.len() == 2);
        check!(students[1].name == "Bob");

        let grades: HashMap<String, u32> = json_path("$.grades")
            .map()
            .transform(&school())
            .expect("grades");
        check!(grades.get("Ann") == Some(&3));
    }

    #[test]
    fn wildcard_lists_keep_their_shape() {
        let one = result(200, "application/json", r#"{"students":[{"name":"Ann"}]}"#);
        let names: Vec<String> = json_path("$.students[*].name")
            .list()
            .transform(&one)
            .expect("one name");
        check!(names == ["Ann"]);

        let none = result(200, "application/json", r#"{"students":[]}"#);
        let names: Vec<String> = json_path("$.students[*].name")
            .list()
            .transform(&none)
            .expect("no names");
        check!(names.is_empty());
    }

    #[test]
    fn parse_continues_on_a_sub_document() {
        let actions = json().parse("$.principal").transform(&school()).expect("actions");
        let actions = actions
            .and_expect(json_path_matcher("$.name").value("Zoe"))
            .expect("principal name");
        check!(actions.and_return().status() == 200);
    }

    #[test]
    fn parse_on_missing_path() {
        let_assert!(Err(err) = json().parse("$.teacher").transform(&school()));
        check!(err.to_string().contains("$.teacher"));
    }
}
