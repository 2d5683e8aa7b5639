use super::*;
use anyhow::anyhow;
use async_trait::async_trait;
use records_client::{RawPage, RecordsApi};
use shared::{
    domain::ApplicationId,
    protocol::{Application, PageQuery},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Serves fixed responses per page number and records the pages asked for.
struct PagedApi {
    pages: HashMap<u32, RawPage>,
    requested: Mutex<Vec<u32>>,
}

impl PagedApi {
    fn new(pages: Vec<(u32, RawPage)>) -> Arc<Self> {
        Arc::new(Self {
            pages: pages.into_iter().collect(),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<u32> {
        self.requested.lock().expect("requested").clone()
    }
}

#[async_trait]
impl RecordsApi for PagedApi {
    async fn get_page(&self, query: PageQuery) -> anyhow::Result<RawPage> {
        self.requested.lock().expect("requested").push(query.page);
        self.pages
            .get(&query.page)
            .cloned()
            .ok_or_else(|| anyhow!("no page {}", query.page))
    }
}

fn ok_page(page: u32, has_next: bool) -> (u32, RawPage) {
    let records = vec![Application {
        id: ApplicationId(page.to_string()),
        loan_amount: 2500.0,
        first_name: "Page".to_string(),
        last_name: page.to_string(),
        company: format!("C{page}"),
        email: format!("page{page}@test.com"),
        date_created: "2025-01-01".to_string(),
        expiry_date: "2025-12-31".to_string(),
    }];
    let raw = RawPage {
        status: 200,
        link: has_next.then(|| "rel=\"next\"".to_string()),
        body: serde_json::to_vec(&records).expect("encode"),
    };
    (page, raw)
}

fn failed_page(page: u32, status: u16) -> (u32, RawPage) {
    let raw = RawPage {
        status,
        link: None,
        body: b"{}".to_vec(),
    };
    (page, raw)
}

async fn drive(api: &Arc<PagedApi>, mode: Mode, input: &[u8]) -> String {
    let controller = ApplicationsController::new(api.clone());
    let mut out = Vec::new();
    run(&controller, mode, &mut out, input).await.expect("run");
    String::from_utf8(out).expect("utf8")
}

#[tokio::test]
async fn all_mode_stops_when_first_page_fails() {
    let api = PagedApi::new(vec![
        failed_page(1, 503),
        ok_page(2, true),
        ok_page(3, false),
    ]);

    let output = drive(&api, Mode::All, b"").await;

    assert_eq!(api.requested(), vec![1]);
    assert!(output.contains("Error: Failed to fetch\n"), "output: {output}");
    assert!(!output.contains("C2"), "output: {output}");
    assert!(output.ends_with("0 applications shown, more available\n"));
}

#[tokio::test]
async fn pages_mode_stops_when_first_page_fails() {
    let api = PagedApi::new(vec![failed_page(1, 500), ok_page(2, true)]);

    let output = drive(&api, Mode::Pages(3), b"").await;

    assert_eq!(api.requested(), vec![1]);
    assert!(output.ends_with("0 applications shown, more available\n"));
}

#[tokio::test]
async fn all_mode_stops_after_a_later_failure() {
    let api = PagedApi::new(vec![
        ok_page(1, true),
        failed_page(2, 500),
        ok_page(3, false),
    ]);

    let output = drive(&api, Mode::All, b"").await;

    assert_eq!(api.requested(), vec![1, 2]);
    assert!(output.contains("C1"));
    assert!(output.contains("Error: Failed to fetch\n"));
    assert!(output.ends_with("1 application shown, more available\n"));
}

#[tokio::test]
async fn all_mode_loads_until_last_page() {
    let api = PagedApi::new(vec![ok_page(1, true), ok_page(2, true), ok_page(3, false)]);

    let output = drive(&api, Mode::All, b"").await;

    assert_eq!(api.requested(), vec![1, 2, 3]);
    assert_eq!(output.matches("Company").count(), 3);
    assert!(!output.contains("Error:"));
    assert!(output.ends_with("3 applications shown\n"));
}

#[tokio::test]
async fn pages_mode_loads_requested_page_count() {
    let api = PagedApi::new(vec![ok_page(1, true), ok_page(2, true), ok_page(3, true)]);

    let output = drive(&api, Mode::Pages(2), b"").await;

    assert_eq!(api.requested(), vec![1, 2]);
    assert!(output.ends_with("2 applications shown, more available\n"));
}

#[tokio::test]
async fn interactive_mode_loads_on_enter_and_quits_on_q() {
    let api = PagedApi::new(vec![ok_page(1, true), ok_page(2, true), ok_page(3, true)]);

    let output = drive(&api, Mode::Interactive, b"\n\nq\n").await;

    assert_eq!(api.requested(), vec![1, 2, 3]);
    assert_eq!(output.matches("[Load More]").count(), 3);
    assert!(output.ends_with("3 applications shown, more available\n"));
}

#[tokio::test]
async fn interactive_mode_hides_prompt_after_first_page_fails() {
    let api = PagedApi::new(vec![failed_page(1, 503), ok_page(2, true)]);

    let output = drive(&api, Mode::Interactive, b"\n\n").await;

    assert_eq!(api.requested(), vec![1]);
    assert!(!output.contains("[Load More]"));
    assert!(output.contains("Error: Failed to fetch\n"));
}
