//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_resolver::proto::rr::{Name, RData, Record, rdata::SOA};
use mythicbeasts_dns01::{
    MythicBeastsProvider, SoaZoneResolver, StaticZoneResolver, ZoneLookupError, ZoneResolver,
};
use tokio::net::UdpSocket;
use wiremock::MockServer;

/// Credentials used by most tests.
pub const FAKE_PASSWORDS: &str = "example.com password123";

/// DNS-01 value of key authorization `foobar`.
pub const FOOBAR_VALUE: &str = "w6uP8Tcg6K2QR905Rms8iXTlksL6OD1KOWBxTK7wxPI";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Expected form body for a command on `example.com` with key authorization `foobar`.
pub fn expected_body(verb: &str) -> String {
    format!(
        "command={verb}+_acme-challenge.example.com.+3600+TXT+{FOOBAR_VALUE}&domain=example.com&password=password123"
    )
}

/// Build a provider pointed at `server`, resolving zones from a fixed list.
pub fn provider_for(
    server: &MockServer,
    passwords: &str,
    zones: &[&str],
) -> mythicbeasts_dns01::Result<MythicBeastsProvider> {
    MythicBeastsProvider::builder(passwords)
        .endpoint(server.uri())
        .timeout(Duration::from_secs(5))
        .zone_resolver(Arc::new(StaticZoneResolver::new(zones.iter().copied())))
        .build()
}

// ============ DNS stub ============

/// How the stub nameserver answers an SOA query for a name.
#[derive(Debug, Clone, Copy)]
pub enum SoaAnswer {
    /// The name is a zone apex.
    Apex,
    NxDomain,
    ServFail,
}

/// Start a UDP nameserver on 127.0.0.1 answering SOA queries from `answers`.
///
/// Names not listed get NXDOMAIN. Returns the bound port.
pub async fn start_dns_stub(answers: &[(&str, SoaAnswer)]) -> u16 {
    let answers: Vec<(String, SoaAnswer)> = answers
        .iter()
        .map(|(name, answer)| ((*name).to_string(), *answer))
        .collect();
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port = socket.local_addr().unwrap().port();

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let Some(query) = request.queries().first().cloned() else {
                continue;
            };
            let answer = answers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&query.name().to_string()))
                .map_or(SoaAnswer::NxDomain, |(_, answer)| *answer);

            let mut response = Message::new();
            response
                .set_id(request.id())
                .set_message_type(MessageType::Response)
                .set_op_code(OpCode::Query)
                .set_recursion_desired(request.recursion_desired())
                .set_recursion_available(true)
                .add_query(query.clone());
            match answer {
                SoaAnswer::Apex => {
                    response
                        .set_response_code(ResponseCode::NoError)
                        .add_answer(soa_record(query.name().clone()));
                }
                SoaAnswer::NxDomain => {
                    response.set_response_code(ResponseCode::NXDomain);
                }
                SoaAnswer::ServFail => {
                    response.set_response_code(ResponseCode::ServFail);
                }
            }

            if let Ok(bytes) = response.to_vec() {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });

    port
}

fn soa_record(zone: Name) -> Record {
    let soa = SOA::new(
        Name::from_ascii("ns1.example.net.").unwrap(),
        Name::from_ascii("hostmaster.example.net.").unwrap(),
        1,
        3600,
        600,
        86400,
        300,
    );
    Record::from_rdata(zone, 300, RData::SOA(soa))
}

/// SOA resolver that only talks to the stub on `port`.
pub fn stub_resolver(port: u16) -> SoaZoneResolver {
    SoaZoneResolver::with_nameservers_on_port(&[IpAddr::V4(Ipv4Addr::LOCALHOST)], port)
}

/// Zone resolver that remembers every name it was asked about.
#[derive(Debug, Default)]
pub struct RecordingZoneResolver {
    inner: StaticZoneResolver,
    pub queries: Mutex<Vec<String>>,
}

impl RecordingZoneResolver {
    pub fn new(zones: &[&str]) -> Self {
        Self {
            inner: StaticZoneResolver::new(zones.iter().copied()),
            queries: Mutex::default(),
        }
    }
}

#[async_trait]
impl ZoneResolver for RecordingZoneResolver {
    async fn find_authority_zone(&self, fqdn: &str) -> Result<String, ZoneLookupError> {
        self.queries.lock().unwrap().push(fqdn.to_string());
        self.inner.find_authority_zone(fqdn).await
    }
}
