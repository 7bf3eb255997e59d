//! Test doubles for handler tests: recording bot and scripted article source.
//! Card assets come from `card_composer::testing`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use article_extractor::{ArticleInfo, ArticleSource};
use async_trait::async_trait;
use card_composer::testing::encoded_image;
use chrono::Utc;
use image::{ImageFormat, Rgb};
use news_core::{Bot, Chat, DbotError, Document, Message, Result, User};

/// One outbound call seen by [`MockBot`].
#[derive(Debug, Clone)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Document { chat_id: i64, document: Document },
}

/// Records every outbound call; optionally fails document sends or one specific text.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_documents: AtomicBool,
    pub fail_text: Option<&'static str>,
}

impl MockBot {
    pub fn failing_documents() -> Self {
        let bot = Self::default();
        bot.fail_documents.store(true, Ordering::SeqCst);
        bot
    }

    pub fn failing_text(text: &'static str) -> Self {
        Self {
            fail_text: Some(text),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Document { .. } => None,
            })
            .collect()
    }

    pub fn documents(&self) -> Vec<Document> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Document { document, .. } => Some(document),
                Sent::Text { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_text == Some(text) {
            return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: Document) -> Result<()> {
        if self.fail_documents.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("Bad Request: file too big".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Document {
            chat_id: chat.id,
            document,
        });
        Ok(())
    }
}

/// Returns a fixed article and records requested URLs.
pub struct ScriptedArticles {
    pub info: ArticleInfo,
    pub requested: Mutex<Vec<String>>,
}

impl ScriptedArticles {
    pub fn new(title: &str, thumbnail_url: Option<String>) -> Self {
        Self {
            info: ArticleInfo {
                title: title.to_string(),
                thumbnail_url,
            },
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for ScriptedArticles {
    async fn extract(&self, url: &str) -> ArticleInfo {
        self.requested.lock().unwrap().push(url.to_string());
        self.info.clone()
    }
}

pub fn jpeg(color: Rgb<u8>, width: u32, height: u32) -> Vec<u8> {
    encoded_image(color, width, height, ImageFormat::Jpeg).unwrap()
}

pub fn message(text: Option<&str>) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 7,
            username: Some("leitor".to_string()),
            first_name: Some("Leitor".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1001,
            chat_type: "private".to_string(),
        },
        text: text.map(str::to_string),
        created_at: Utc::now(),
    }
}
