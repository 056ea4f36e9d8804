//! End-to-end pipeline scenarios
//!
//! Full runs through detection, extraction, classification, calculation,
//! and rendering, including delivery through a mock transport.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use fiscal_agent_agent::FiscalAgent;
use fiscal_agent_core::{
    CalculationType, DeliveryReceipt, Language, MessageSender, QueryOutcome,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

fn agent() -> FiscalAgent {
    init_tracing();
    FiscalAgent::with_defaults().expect("default agent")
}

fn expect_success(outcome: QueryOutcome) -> fiscal_agent_core::QueryResponse {
    match outcome {
        QueryOutcome::Success(r) => r,
        QueryOutcome::Failure(f) => panic!("pipeline failed: {}", f.error),
    }
}

#[test]
fn scenario_french_vat() {
    let r = expect_success(agent().process("Calculer la TVA sur 150000 DZD"));

    assert_eq!(r.language, Language::French);
    assert_eq!(r.calculation_type, CalculationType::Vat);
    assert_eq!(r.entities.amount, Some(dec!(150000)));
    assert!(r.response.contains("Montant TVA: 28,500.00 DZD"));
    assert!(r.response.contains("Montant TTC: 178,500.00 DZD"));
}

#[test]
fn scenario_french_income_tax_with_dependents() {
    let r = expect_success(agent().process("IRG pour salaire 300000 DZD avec 2 enfants"));

    assert_eq!(r.language, Language::French);
    assert_eq!(r.calculation_type, CalculationType::IncomeTax);
    assert_eq!(r.entities.amount, Some(dec!(300000)));
    assert_eq!(r.entities.dependents, Some(2));
    // allowances 15000, taxable 285000, 23% band over 165000 = 37950
    assert!(r.response.contains("Abattements: 15,000.00 DZD"));
    assert!(r.response.contains("IRG: 37,950.00 DZD"));
    assert!(r.response.contains("Salaire net: 262,050.00 DZD"));
}

#[test]
fn scenario_export_exemption() {
    let r = expect_success(agent().process("TVA export 200000 DZD"));

    assert_eq!(r.calculation_type, CalculationType::Vat);
    assert!(r.entities.is_export);
    assert!(r.response.contains("Montant TVA: 0.00 DZD"));
    assert!(r.response.contains("Montant TTC: 200,000.00 DZD"));
}

#[test]
fn scenario_tifinagh_wins_over_keywords() {
    let r = expect_success(agent().process("ⴰⵙⵉⴹⴻⵏ tva 100000 DZD"));

    assert_eq!(r.language, Language::Amazigh);
}

#[test]
fn scenario_empty_intent_yields_french_help() {
    let r = expect_success(agent().process("Bonjour"));

    assert_eq!(r.language, Language::French);
    assert_eq!(r.calculation_type, CalculationType::General);
    assert_eq!(r.response, "Je peux vous aider avec les calculs fiscaux algériens");
}

#[test]
fn arabic_vat_query_renders_arabic() {
    let r = expect_success(agent().process("احسب ضريبة قيمة مضافة على 100000 دينار"));

    assert_eq!(r.language, Language::Arabic);
    assert_eq!(r.calculation_type, CalculationType::Vat);
    assert!(r.response.contains("المبلغ الإجمالي: 119,000.00 دج"));
}

#[test]
fn darija_salary_query_renders_darija() {
    let r = expect_success(agent().process("كيفاش نحسب الضريبة على الراتب 200000 دج؟"));

    assert_eq!(r.language, Language::Darija);
    assert_eq!(r.calculation_type, CalculationType::IncomeTax);
    assert!(r.response.contains("الراتب الكامل: 200,000.00 دج"));
}

#[test]
fn amazigh_latin_query_renders_amazigh() {
    let r = expect_success(agent().process("Asiḍen azal n tmerci 100000 idrimen"));

    assert_eq!(r.language, Language::Amazigh);
    assert_eq!(r.calculation_type, CalculationType::Vat);
    assert!(r.response.contains("Azal s tigawin: 119,000.00 DZD"));
}

#[test]
fn rendering_is_idempotent() {
    let agent = agent();
    for query in [
        "Calculer la TVA sur 150000 DZD",
        "IRG pour salaire 300000 DZD avec 2 enfants",
        "Bonjour",
    ] {
        let a = expect_success(agent.process(query));
        let b = expect_success(agent.process(query));
        assert_eq!(a.response, b.response);
        assert_eq!(a.entities, b.entities);
    }
}

#[test]
fn missing_amount_yields_zero_result() {
    let r = expect_success(agent().process("Calculer la TVA"));

    assert_eq!(r.calculation_type, CalculationType::Vat);
    assert_eq!(r.entities.amount, None);
    assert!(r.response.contains("Montant TTC: 0.00 DZD"));
}

#[test]
fn envelope_serializes_flat() {
    let r = agent().process("Calculer la TVA sur 150000 DZD");
    let json = serde_json::to_value(&r).expect("serialize envelope");

    assert_eq!(json["success"], true);
    assert_eq!(json["language"], "french");
    assert_eq!(json["calculation_type"], "vat");
    assert_eq!(json["entities"]["amount"], "150000");
    assert!(json["query_id"].is_string());
    assert!(json["timestamp"].is_string());
}

/// Transport double recording every delivery
#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn deliver(
        &self,
        recipient: &str,
        text: &str,
    ) -> fiscal_agent_core::Result<DeliveryReceipt> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((recipient.to_string(), text.to_string()));
        Ok(DeliveryReceipt {
            recipient: recipient.to_string(),
            message_id: format!("msg-{}", sent.len()),
            delivered_at: chrono::Utc::now(),
        })
    }
}

#[tokio::test]
async fn response_passes_through_transport_unchanged() {
    let agent = agent();
    let sender = RecordingSender::default();

    let r = expect_success(agent.process("Calculer la TVA sur 150000 DZD"));
    let receipt = sender.deliver("user-42", &r.response).await.expect("delivery");

    assert_eq!(receipt.recipient, "user-42");
    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, r.response);
}
