//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use acme_custom_dns::{CustomDnsOptions, CustomDnsProvider, Diagnostic, DiagnosticSink, DnsZone};
use wiremock::MockServer;

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const API_KEY: &str = "test-api-key";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got Err({:?})", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Diagnostic sink that records every event.
#[derive(Default)]
pub struct CapturingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CapturingSink {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CapturingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic.clone());
        }
    }
}

/// 测试上下文：mock 服务器 + provider + 诊断捕获
pub struct TestContext {
    pub server: MockServer,
    pub provider: CustomDnsProvider,
    pub sink: Arc<CapturingSink>,
}

impl TestContext {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let sink = Arc::new(CapturingSink::default());
        let options = CustomDnsOptions::new(server.uri(), API_KEY)
            .with_api_key_header_name(API_KEY_HEADER)
            .with_propagation_seconds(60);
        let provider = CustomDnsProvider::with_diagnostics(&options, sink.clone())
            .unwrap_or_else(|e| panic!("failed to create provider: {e}"));

        Self {
            server,
            provider,
            sink,
        }
    }
}

pub fn test_zone() -> DnsZone {
    DnsZone {
        id: "7".to_string(),
        name: "example.com".to_string(),
        name_servers: vec!["ns1.example.com".to_string()],
    }
}
