//! Status-code classification.
//!
//! The classifier turns a non-success response into a typed error using
//! the per-resource diagnostic tables of the [`Resource`] registry. It is
//! consulted only after the caller has decided the status is a failure.

use bytes::Bytes;

use crate::error::{ClassifiedError, Error, UnclassifiedError};
use crate::resources::Resource;
use crate::types::Response;

/// Maps `(status code, resource)` to a classified or unclassified error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a failure status for the named resource.
    ///
    /// Codes listed for the resource become [`ClassifiedError`]. Anything
    /// else, including names that are not registered, becomes
    /// [`UnclassifiedError`] with the body preserved verbatim.
    pub fn classify(&self, code: u16, resource: &str, body: &[u8]) -> Error {
        let body = Bytes::copy_from_slice(body);

        match Resource::lookup(resource).and_then(|r| r.diagnostic(code)) {
            Some(message) => ClassifiedError {
                code,
                resource: resource.to_string(),
                message: message.to_string(),
                body,
            }
            .into(),
            None => UnclassifiedError {
                code,
                resource: resource.to_string(),
                body,
            }
            .into(),
        }
    }

    /// Pass a success response through, classify anything else.
    pub fn check(&self, resource: &Resource, response: Response) -> Result<Response, Error> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(self.classify(response.status(), resource.name(), response.body()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(err: Error) -> ClassifiedError {
        match err {
            Error::Classified(e) => e,
            other => panic!("expected classified error, got {other:?}"),
        }
    }

    #[test]
    fn department_not_found() {
        let err = classified(ErrorClassifier::new().classify(404, "GetDepartment", b"dep-1"));
        assert_eq!(err.code, 404);
        assert_eq!(err.resource, "GetDepartment");
        assert_eq!(
            err.message,
            "не найдена организация или подразделение с указанным идентификатором"
        );
        assert_eq!(err.body.as_ref(), b"dep-1");
    }

    #[test]
    fn same_code_on_other_resource_has_other_diagnostic() {
        let classifier = ErrorClassifier::new();
        let department = classified(classifier.classify(404, "GetDepartment", b""));
        let employees = classified(classifier.classify(404, "GetEmployees", b""));

        assert_eq!(employees.message, "Указанного ящика не существует");
        assert_ne!(department.message, employees.message);
    }

    #[test]
    fn unlisted_code_keeps_raw_body() {
        let body = "I'm a teapot\n\u{1F375}";
        match ErrorClassifier::new().classify(418, "GetDepartment", body.as_bytes()) {
            Error::Unclassified(e) => {
                assert_eq!(e.code, 418);
                assert_eq!(e.resource, "GetDepartment");
                assert_eq!(e.text(), body);
            }
            other => panic!("expected unclassified error, got {other:?}"),
        }
    }

    #[test]
    fn binary_body_is_kept_byte_for_byte() {
        let body = [0x08, 0x96, 0x01, 0xff];
        match ErrorClassifier::new().classify(418, "GetDepartment", &body) {
            Error::Unclassified(e) => assert_eq!(e.body.as_ref(), &body),
            other => panic!("expected unclassified error, got {other:?}"),
        }

        let err = classified(ErrorClassifier::new().classify(404, "GetDepartment", &body));
        assert_eq!(err.body.as_ref(), &body);
    }

    #[test]
    fn unknown_resource_is_unclassified() {
        assert!(matches!(
            ErrorClassifier::new().classify(404, "NoSuchResource", b""),
            Error::Unclassified(_)
        ));
    }

    #[test]
    fn check_passes_success_through() {
        let resource = Resource::get("GetBox").unwrap();
        let response = Response::with_status(200, "box");
        let checked = ErrorClassifier::new().check(resource, response).unwrap();
        assert_eq!(checked.body().as_ref(), b"box");
    }

    #[test]
    fn check_classifies_failure() {
        let resource = Resource::get("ShelfDownload").unwrap();
        let response = Response::with_status(404, "missing");
        let err = classified(ErrorClassifier::new().check(resource, response).unwrap_err());
        assert_eq!(err.message, "Файл на полке не найден");
    }
}
