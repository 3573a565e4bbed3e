//! Telegram notification delivery
//!
//! Sole consumer of the core's output: formats a deal report and routes it
//! by tier. `excellent` deals go to the high-priority chat when one is
//! configured, `good` deals to the standard chat, `none` is silent.

use crate::config::TelegramConfig;
use crate::error::{RadarError, Result};
use crate::types::{DealReport, DealTier};
use reqwest::Client;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, info};

pub struct Notifier {
    http: Client,
    bot_token: Option<String>,
    chat_id: String,
    high_priority_chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
    parse_mode: String,
}

impl Notifier {
    pub fn new(bot_token: String, chat_id: String, high_priority_chat_id: Option<String>) -> Self {
        Self {
            http: Client::new(),
            bot_token: Some(bot_token),
            chat_id,
            high_priority_chat_id,
        }
    }

    /// Notifier that drops every message, for running without Telegram
    pub fn disabled() -> Self {
        Self {
            http: Client::new(),
            bot_token: None,
            chat_id: String::new(),
            high_priority_chat_id: None,
        }
    }

    pub fn from_config(config: Option<&TelegramConfig>) -> Self {
        match config {
            Some(tg) => Self::new(
                tg.bot_token.clone(),
                tg.chat_id.clone(),
                tg.high_priority_chat_id.clone(),
            ),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Send a deal report to the chat matching its tier. `none`-tier
    /// reports and reports that failed the good-deal gates are silent by
    /// policy, not by error.
    pub async fn deal_found(&self, report: &DealReport) -> Result<()> {
        if report.tier == DealTier::None || !report.verdict.is_good_deal {
            debug!(query = %report.product_query, "deal below notification policy, skipping");
            return Ok(());
        }

        let chat = match report.tier {
            DealTier::Excellent => self
                .high_priority_chat_id
                .as_deref()
                .unwrap_or(&self.chat_id),
            _ => &self.chat_id,
        };

        let text = format_deal_message(report);
        self.send(chat, &text).await
    }

    /// Raw message to the standard chat, for tests and status pings
    pub async fn send_raw(&self, text: &str) -> Result<()> {
        let chat = self.chat_id.clone();
        self.send(&chat, text).await
    }

    async fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        let Some(token) = &self.bot_token else {
            debug!("notifier disabled, dropping message");
            return Ok(());
        };

        let url = format!("https://api.telegram.org/bot{token}/sendMessage");
        let request = SendMessageRequest {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: "HTML".to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RadarError::Notify(format!(
                "telegram sendMessage returned {status}: {body}"
            )));
        }

        info!(chat_id, "notification sent");
        Ok(())
    }
}

fn format_deal_message(report: &DealReport) -> String {
    let emoji = match report.tier {
        DealTier::Excellent => "🔥",
        DealTier::Good => "💰",
        DealTier::None => "ℹ️",
    };

    format!(
        "{emoji} <b>{tier} deal</b>\n\n\
        Product: {query}\n\
        Current price: ${price}\n\
        Average resale: ${mean}\n\
        Range: {range}\n\
        Profit: ${profit} ({pct:.1}%)\n\
        Confidence: {confidence} ({samples} samples)",
        tier = report.tier,
        query = report.product_query,
        price = report.current_price,
        mean = report.estimate.mean,
        range = report.estimate.range,
        profit = report.verdict.profit_amount,
        pct = report.verdict.profit_ratio * dec!(100),
        confidence = report.verdict.confidence,
        samples = report.estimate.sample_count(),
    )
}
