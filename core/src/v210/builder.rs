#![deny(missing_docs)]

//! # v2.1.0 Collection Builder
//!
//! Walks the shim tree and produces the canonical model.
//!
//! Auth inheritance is resolved while walking: each call receives the auth of
//! the nearest ancestor that declared one (the collection itself being the
//! outermost ancestor). Folders store only their own declaration.

use crate::auth::{effective_auth, resolve_auth};
use crate::error::CollectionResult;
use crate::ids::IdGenerator;
use crate::model::{Auth, Collection, Folder, KeyValuePair, OriginalRequest, Request, Response};
use crate::options::ParseOptions;
use crate::pairs::{normalize_filtered, normalize_pairs};
use crate::v210::shims::{
    ShimAuth, ShimCollection, ShimEvent, ShimItem, ShimPair, ShimRequest, ShimResponse,
};

/// Children of one tree level.
type Level = (Vec<Folder>, Vec<Request>);

/// Folds a decoded v2.1.0 document into a `Collection`.
pub(crate) struct CollectionBuilder<'a> {
    options: &'a ParseOptions,
    ids: &'a mut dyn IdGenerator,
}

impl<'a> CollectionBuilder<'a> {
    pub(crate) fn new(options: &'a ParseOptions, ids: &'a mut dyn IdGenerator) -> Self {
        Self { options, ids }
    }

    pub(crate) fn build(mut self, src: ShimCollection) -> CollectionResult<Collection> {
        let auth = resolve_auth(src.auth.as_ref().map(ShimAuth::as_raw))?;
        let (folders, requests) = self.compute_items(&src.item, auth.as_ref())?;

        tracing::debug!(
            name = %src.info.name,
            folders = folders.len(),
            requests = requests.len(),
            "built collection"
        );

        Ok(Collection {
            name: src.info.name,
            description: src.info.description,
            requests,
            folders,
            structures: Vec::new(),
            auth,
        })
    }

    fn compute_items(
        &mut self,
        items: &[ShimItem],
        inherited: Option<&Auth>,
    ) -> CollectionResult<Level> {
        let mut folders = Vec::new();
        let mut requests = Vec::new();

        for item in items {
            match &item.request {
                None => folders.push(self.build_folder(item, inherited)?),
                Some(request) => requests.push(self.build_request(item, request, inherited)?),
            }
        }

        Ok((folders, requests))
    }

    fn build_folder(
        &mut self,
        item: &ShimItem,
        inherited: Option<&Auth>,
    ) -> CollectionResult<Folder> {
        let auth = resolve_auth(item.auth.as_ref().map(ShimAuth::as_raw))?;
        let id = self.ids.next_id();
        let anchor = auth.as_ref().or(inherited);
        let (folders, requests) = self.compute_items(&item.item, anchor)?;

        Ok(Folder {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            folders,
            requests,
            auth,
        })
    }

    fn build_request(
        &mut self,
        item: &ShimItem,
        request: &ShimRequest,
        inherited: Option<&Auth>,
    ) -> CollectionResult<Request> {
        let item_auth = resolve_auth(item.auth.as_ref().map(ShimAuth::as_raw))?;
        let request_auth = resolve_auth(request.auth.as_ref().map(ShimAuth::as_raw))?;
        let local = item_auth.or(request_auth);
        let auth = effective_auth(local.as_ref(), inherited);
        let id = self.ids.next_id();

        let description = if request.description.is_empty() {
            item.description.clone()
        } else {
            request.description.clone()
        };

        Ok(Request {
            id,
            name: item.name.clone(),
            description,
            original: self.original_request(request, auth.clone()),
            path_variables: normalize_pairs(request.url.variables().iter().map(ShimPair::as_raw)),
            responses: self.build_responses(&item.response, auth.as_ref()),
            tests: extract_tests(&item.event),
        })
    }

    fn build_responses(
        &mut self,
        responses: &[ShimResponse],
        auth: Option<&Auth>,
    ) -> Vec<Response> {
        responses
            .iter()
            .map(|resp| self.build_response(resp, auth))
            .collect()
    }

    fn build_response(&mut self, resp: &ShimResponse, auth: Option<&Auth>) -> Response {
        let original_request = match &resp.original_request {
            Some(request) => self.original_request(request, auth.cloned()),
            None => OriginalRequest {
                auth: auth.cloned(),
                ..Default::default()
            },
        };

        Response {
            id: self.ids.next_id(),
            name: resp.name.clone(),
            status: resp.status.clone(),
            status_code: resp.code,
            body: resp.body.clone(),
            headers: self.response_headers(&resp.header),
            original_request,
        }
    }

    /// Any `auth` inside `request` is ignored; the caller passes the effective one.
    fn original_request(&self, request: &ShimRequest, auth: Option<Auth>) -> OriginalRequest {
        OriginalRequest {
            method: request.method.clone(),
            url: request.url.raw().to_string(),
            payload_type: request.body.mode.clone(),
            payload_raw: request.body.raw.clone(),
            payload_params: normalize_pairs(request.body.params().iter().map(ShimPair::as_raw)),
            headers: self.request_headers(&request.header),
            auth,
        }
    }

    fn request_headers(&self, headers: &[ShimPair]) -> Vec<KeyValuePair> {
        let options = self.options;
        normalize_filtered(headers.iter().map(ShimPair::as_raw), |key| {
            options.is_request_header_ignored(key)
        })
    }

    fn response_headers(&self, headers: &[ShimPair]) -> Vec<KeyValuePair> {
        let options = self.options;
        normalize_filtered(headers.iter().map(ShimPair::as_raw), |key| {
            options.is_response_header_ignored(key)
        })
    }
}

/// Body of the first `test` event, or empty.
fn extract_tests(events: &[ShimEvent]) -> String {
    events
        .iter()
        .find(|event| event.listen == "test")
        .map(|event| event.script.exec.joined())
        .unwrap_or_default()
}
