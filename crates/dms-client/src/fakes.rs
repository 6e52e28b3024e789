//! In-memory transport (testing only)
//!
//! `MemoryTransport` answers from per-target queues of scripted responses
//! and records every request it is handed.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::codec::{WireRequest, WireResponse};
use crate::operation::Operation;
use crate::transport::{Transport, TransportError};

type Scripted = Result<WireResponse, TransportError>;

/// Scripted transport keyed by `X-Amz-Target`.
///
/// Responses queued for a target are handed out in FIFO order. A request
/// for a target with an empty queue fails with
/// [`TransportError::NoResponse`].
#[derive(Debug, Default)]
pub struct MemoryTransport {
    scripted: Mutex<HashMap<String, VecDeque<Scripted>>>,
    sent: Mutex<Vec<WireRequest>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` for the next call to `Op`.
    pub fn respond<Op: Operation>(&self, response: WireResponse) -> &Self {
        self.push(Op::target(), Ok(response))
    }

    /// Queue a 200 response whose body is `output` serialized. Panics if
    /// `output` does not serialize.
    pub fn respond_ok<Op: Operation>(&self, output: &Op::Output) -> &Self {
        let body = serde_json::to_vec(output).expect("scripted output serializes");
        self.respond::<Op>(WireResponse::new(200, body))
    }

    /// Queue a transport failure for the next call to `Op`.
    pub fn fail<Op: Operation>(&self, error: TransportError) -> &Self {
        self.push(Op::target(), Err(error))
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<WireRequest> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Requests sent to `Op`, oldest first.
    pub fn requests_for<Op: Operation>(&self) -> Vec<WireRequest> {
        let target = Op::target();
        self.requests()
            .into_iter()
            .filter(|r| r.target == target)
            .collect()
    }

    /// Number of scripted responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(VecDeque::len)
            .sum()
    }

    fn push(&self, target: String, entry: Scripted) -> &Self {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(target)
            .or_default()
            .push_back(entry);
        self
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, TransportError> {
        let target = request.target.clone();
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&target)
            .and_then(VecDeque::pop_front);

        next.unwrap_or(Err(TransportError::NoResponse { target }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;
    use crate::operation::{DescribeCertificates, ListTagsForResource, ReloadTables};
    use dms_model::{
        DescribeCertificatesRequest, ListTagsForResourceRequest, ListTagsForResourceResult, Tag,
    };

    #[tokio::test]
    async fn test_fifo_per_target() {
        let transport = MemoryTransport::new();
        transport
            .respond::<DescribeCertificates>(WireResponse::new(200, "{\"Marker\":\"1\"}"))
            .respond::<DescribeCertificates>(WireResponse::new(200, "{\"Marker\":\"2\"}"));
        assert_eq!(transport.pending(), 2);

        let request =
            encode_request::<DescribeCertificates>(&DescribeCertificatesRequest::default())
                .unwrap();
        let first = transport.send(request.clone()).await.unwrap();
        let second = transport.send(request).await.unwrap();

        assert_eq!(first.body, b"{\"Marker\":\"1\"}");
        assert_eq!(second.body, b"{\"Marker\":\"2\"}");
        assert_eq!(transport.pending(), 0);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_unscripted_target_fails_but_is_recorded() {
        let transport = MemoryTransport::new();
        transport.respond::<ReloadTables>(WireResponse::new(200, "{}"));

        let request =
            encode_request::<DescribeCertificates>(&DescribeCertificatesRequest::default())
                .unwrap();
        let err = transport.send(request).await.unwrap_err();

        assert_eq!(
            err,
            TransportError::NoResponse {
                target: "AmazonDMSv20160101.DescribeCertificates".to_string()
            }
        );
        assert_eq!(transport.requests_for::<DescribeCertificates>().len(), 1);
        assert!(transport.requests_for::<ReloadTables>().is_empty());
        assert_eq!(transport.pending(), 1);
    }

    #[tokio::test]
    async fn test_respond_ok_queues_serialized_output() {
        let output =
            ListTagsForResourceResult::default().tag_list(vec![Tag::new("team", "data")]);
        let transport = MemoryTransport::new();
        transport.respond_ok::<ListTagsForResource>(&output);

        let request =
            encode_request::<ListTagsForResource>(&ListTagsForResourceRequest::default())
                .unwrap();
        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"TagList":[{"Key":"team","Value":"data"}]}"#);
        let decoded: ListTagsForResourceResult = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(decoded, output);
    }
}
