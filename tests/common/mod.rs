#![allow(dead_code)]

use async_trait::async_trait;
use estate_scout::api::{ListResponse, PropertyApi, PropertyPage};
use estate_scout::errors::{TransportError, TransportResult};
use estate_scout::{ApiPropertyRepository, Property, PropertyApplication, PropertyId, PropertyQuery};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub type StubApp = PropertyApplication<ApiPropertyRepository<StubApi>>;

pub fn villa() -> Property {
    Property::new(1, "Beautiful Villa", 250000.0)
        .with_address("123 Main St, City, State")
        .with_description("A lovely family home with great amenities")
        .with_rooms(4, 3)
}

pub fn apartment() -> Property {
    Property::new(2, "Modern Apartment", 180000.0)
        .with_address("456 Oak Ave, City, State")
        .with_description("Stylish apartment in the heart of downtown")
        .with_rooms(2, 1)
}

/// In-memory stand-in for the listing API that filters like the real backend
pub struct StubApi {
    properties: Vec<Property>,
    enveloped: bool,
    failing: bool,
    pub queries: Arc<Mutex<Vec<PropertyQuery>>>,
}

impl StubApi {
    pub fn seeded(properties: Vec<Property>) -> Self {
        Self {
            properties,
            enveloped: false,
            failing: false,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer list requests with `{properties, totalCount}` instead of a bare array
    pub fn enveloped(mut self) -> Self {
        self.enveloped = true;
        self
    }

    /// Every request fails with a 500
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn server_error() -> TransportError {
        TransportError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    }
}

fn contains(haystack: &str, needle: &Option<String>) -> bool {
    needle
        .as_ref()
        .map_or(true, |n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

#[async_trait]
impl PropertyApi for StubApi {
    async fn list_properties(&self, query: &PropertyQuery) -> TransportResult<ListResponse> {
        self.queries.lock().unwrap().push(query.clone());
        if self.failing {
            return Err(Self::server_error());
        }

        let mut matches: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| contains(&p.name, &query.name))
            .filter(|p| contains(&p.address, &query.address))
            .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
            .cloned()
            .collect();

        if query.sort_by.is_some() {
            matches.sort_by(|a, b| b.price.total_cmp(&a.price));
        }

        if self.enveloped {
            Ok(ListResponse::Envelope(PropertyPage {
                total_count: Some(matches.len() as u64),
                properties: Some(matches),
            }))
        } else {
            Ok(ListResponse::Bare(matches))
        }
    }

    async fn get_property(&self, id: &PropertyId) -> TransportResult<Property> {
        if self.failing {
            return Err(Self::server_error());
        }
        self.properties
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(TransportError::NotFound)
    }
}

pub fn app(api: StubApi) -> Arc<StubApp> {
    Arc::new(PropertyApplication::from_repository(ApiPropertyRepository::new(api)))
}

/// Serve exactly one HTTP response on a local port.
///
/// Returns the base URL to point the client at and a handle resolving to the
/// request line the client sent.
pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{}/api/v1.0", addr), handle)
}
