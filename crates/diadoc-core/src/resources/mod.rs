//! Remote operations known to the client.
//!
//! Each [`Resource`] names one remote operation, where it lives, how its
//! result is delivered and what each non-success status means for it. The
//! same status code carries different meanings on different resources, so
//! diagnostics are stored per resource rather than globally.

mod registry;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, InvalidInputError};
use crate::types::{Method, QueryParams, Request};

use registry::RESOURCES;

/// Name of the login resource.
pub const AUTHENTICATE: &str = "Authenticate";

/// Path of the login endpoint. Calls to it never trigger a renewal.
pub const AUTHENTICATE_PATH: &str = "/V3/Authenticate";

/// How a resource delivers its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The first success response is the result.
    Immediate,
    /// The server may answer "processing, retry after N seconds".
    Polled,
    /// A 204 is a valid empty result, not a retry signal.
    EmptyOnNoContent,
}

/// A named remote operation and its status diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    name: &'static str,
    method: Method,
    path: &'static str,
    completion: Completion,
    statuses: &'static [(u16, &'static str)],
}

static BY_NAME: LazyLock<HashMap<&'static str, &'static Resource>> =
    LazyLock::new(|| RESOURCES.iter().map(|r| (r.name, r)).collect());

impl Resource {
    /// Look up a registered resource by name, e.g. `"GetDepartment"`.
    pub fn lookup(name: &str) -> Option<&'static Resource> {
        BY_NAME.get(name).copied()
    }

    /// Like [`Resource::lookup`], failing with `InvalidInput` for unknown names.
    pub fn get(name: &str) -> Result<&'static Resource, Error> {
        Self::lookup(name).ok_or_else(|| {
            InvalidInputError::UnknownResource {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// All registered resources, in registry order.
    pub fn all() -> &'static [Resource] {
        RESOURCES
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// The diagnostic registered for a status code, if any.
    pub fn diagnostic(&self, code: u16) -> Option<&'static str> {
        self.statuses
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, message)| *message)
    }

    /// Status codes with a registered diagnostic.
    pub fn status_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.statuses.iter().map(|(code, _)| *code)
    }

    /// Build the request for this resource.
    pub fn request(&self, query: QueryParams) -> Result<Request, Error> {
        Ok(Request::new(self.method, self.path)?.with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Resource::all().iter().map(Resource::name).collect();
        assert_eq!(names.len(), Resource::all().len());
    }

    #[test]
    fn paths_are_absolute() {
        for resource in Resource::all() {
            assert!(resource.path().starts_with('/'), "{}", resource.name());
        }
    }

    #[test]
    fn authenticate_is_registered() {
        let login = Resource::get(AUTHENTICATE).unwrap();
        assert_eq!(login.path(), AUTHENTICATE_PATH);
        assert_eq!(login.method(), Method::Post);
    }

    #[test]
    fn unknown_name_is_invalid_input() {
        assert!(Resource::lookup("NoSuchThing").is_none());
        assert!(matches!(
            Resource::get("NoSuchThing"),
            Err(Error::InvalidInput(InvalidInputError::UnknownResource { .. }))
        ));
    }

    #[test]
    fn completion_modes() {
        assert_eq!(
            Resource::get("AcquireCounteragentResult").unwrap().completion(),
            Completion::Polled
        );
        assert_eq!(
            Resource::get("GetGeneratedPrintForm").unwrap().completion(),
            Completion::Polled
        );
        assert_eq!(
            Resource::get("GetLastEvent").unwrap().completion(),
            Completion::EmptyOnNoContent
        );
        assert_eq!(
            Resource::get("GetBox").unwrap().completion(),
            Completion::Immediate
        );
    }

    #[test]
    fn same_code_differs_between_resources() {
        let roaming = Resource::get("AcquireCounteragent").unwrap();
        let send = Resource::get("PostMessage").unwrap();
        assert_ne!(roaming.diagnostic(409), send.diagnostic(409));
        assert!(roaming.diagnostic(409).is_some());
    }

    #[test]
    fn request_uses_registered_method_and_path() {
        let request = Resource::get("ShelfDownload")
            .unwrap()
            .request(QueryParams::new().with("nameOnShelf", "api-1"))
            .unwrap();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/ShelfDownload");
        assert_eq!(request.query().get("nameOnShelf"), Some("api-1"));
    }
}
