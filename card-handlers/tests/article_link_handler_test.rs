//! Scenario tests for [`card_handlers::ArticleLinkHandler`] and [`card_handlers::StartHandler`]:
//! rejection without network calls, the full link → card flow, thumbnail timeouts and failures.

use std::sync::Arc;
use std::time::Duration;

use article_extractor::ArticleExtractor;
use card_composer::{CardComposer, CardLayout};
use card_handlers::{
    ArticleLinkHandler, StartHandler, CARD_CAPTION, CARD_FILE_NAME, MSG_COMPOSE_FAILED,
    MSG_INVALID_LINK, MSG_PROCESSING, MSG_READY,
};
use image::{ImageFormat, Rgb};
use news_core::{DbotError, Handler, HandlerError, HandlerResponse};

use card_composer::testing::{close_to, static_assets, MissingAssets, BACKGROUND};

mod common;
use common::mock_bot::{jpeg, message, MockBot, ScriptedArticles, Sent};

const ARTICLE_URL: &str = "https://www.odiarioonline.com.br/noticia/123";
const RED: Rgb<u8> = Rgb([220, 20, 20]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// First glyph of the first title line, final coordinates.
const TEXT_SPOT: (u32, u32) = (108, 277);
/// Center of the thumbnail area, final coordinates.
const OVERLAY_SPOT: (u32, u32) = (540, 900);

fn composer(layout: CardLayout) -> Arc<CardComposer> {
    Arc::new(CardComposer::new(layout, static_assets()))
}

fn decode(bytes: &[u8]) -> image::RgbImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
        .unwrap()
        .to_rgb8()
}

/// **Test: /start gets the readiness reply and stops the chain; other text passes through.**
#[tokio::test]
async fn test_start_command() {
    let bot = Arc::new(MockBot::default());
    let handler = StartHandler::new(bot.clone());

    let response = handler.handle(&message(Some("/start"))).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(bot.texts(), vec![MSG_READY.to_string()]);

    let response = handler.handle(&message(Some(ARTICLE_URL))).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(bot.sent().len(), 1);
}

/// **Test: "hello" gets exactly one rejection reply and no extraction is attempted.**
#[tokio::test]
async fn test_plain_text_rejected_without_network() {
    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new("unused", None));
    let handler =
        ArticleLinkHandler::new(bot.clone(), articles.clone(), composer(CardLayout::default()));

    let response = handler.handle(&message(Some("hello"))).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(bot.texts(), vec![MSG_INVALID_LINK.to_string()]);
    assert!(bot.documents().is_empty());
    assert!(articles.requested().is_empty());
}

/// **Test: A link to another site is rejected like plain text.**
#[tokio::test]
async fn test_foreign_link_rejected() {
    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new("unused", None));
    let handler =
        ArticleLinkHandler::new(bot.clone(), articles.clone(), composer(CardLayout::default()));

    handler
        .handle(&message(Some("https://g1.globo.com/noticia/1")))
        .await
        .unwrap();

    assert_eq!(bot.texts(), vec![MSG_INVALID_LINK.to_string()]);
    assert!(articles.requested().is_empty());
}

/// **Test: A message without text produces no outbound traffic.**
#[tokio::test]
async fn test_message_without_text_is_silent() {
    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new("unused", None));
    let handler =
        ArticleLinkHandler::new(bot.clone(), articles.clone(), composer(CardLayout::default()));

    let response = handler.handle(&message(None)).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sent().is_empty());
    assert!(articles.requested().is_empty());
}

/// **Test: Valid link with a JPEG thumbnail: one "processing" reply, then one document of the final
/// resolution with the title drawn and the thumbnail pasted.**
#[tokio::test]
async fn test_article_link_produces_card() {
    let mut server = mockito::Server::new_async().await;
    let thumb = server
        .mock("GET", "/thumbs/obra.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(jpeg(RED, 90, 60))
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new(
        "Prefeito anuncia obra",
        Some(format!("{}/thumbs/obra.jpg", server.url())),
    ));
    let handler =
        ArticleLinkHandler::new(bot.clone(), articles.clone(), composer(CardLayout::default()));

    let response = handler
        .handle(&message(Some(&format!("  {}  ", ARTICLE_URL))))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(articles.requested(), vec![ARTICLE_URL.to_string()]);

    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    assert!(matches!(&sent[0], Sent::Text { chat_id: 1001, text } if text == MSG_PROCESSING));
    let Sent::Document { chat_id, document } = &sent[1] else {
        panic!("expected a document, got {:?}", sent[1]);
    };
    assert_eq!(*chat_id, 1001);
    assert_eq!(document.file_name, CARD_FILE_NAME);
    assert_eq!(document.caption.as_deref(), Some(CARD_CAPTION));

    let card = decode(&document.bytes);
    assert_eq!(card.dimensions(), (1080, 1920));
    assert!(close_to(*card.get_pixel(TEXT_SPOT.0, TEXT_SPOT.1), WHITE, 30));
    assert!(close_to(*card.get_pixel(OVERLAY_SPOT.0, OVERLAY_SPOT.1), RED, 30));
    thumb.assert_async().await;
}

/// **Test: Valid link whose thumbnail host never answers still yields exactly one document, without the overlay.**
#[tokio::test]
async fn test_thumbnail_timeout_still_sends_card() {
    let silent = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new(
        "Prefeito anuncia obra",
        Some(format!("http://{}/thumb.jpg", silent.local_addr().unwrap())),
    ));
    let layout = CardLayout::default().with_thumbnail_timeout(Duration::from_millis(200));
    let handler = ArticleLinkHandler::new(bot.clone(), articles, composer(layout));

    handler.handle(&message(Some(ARTICLE_URL))).await.unwrap();

    assert_eq!(bot.texts(), vec![MSG_PROCESSING.to_string()]);
    let documents = bot.documents();
    assert_eq!(documents.len(), 1);
    let card = decode(&documents[0].bytes);
    assert_eq!(card.dimensions(), (1080, 1920));
    assert!(close_to(
        *card.get_pixel(OVERLAY_SPOT.0, OVERLAY_SPOT.1),
        BACKGROUND,
        30
    ));
    drop(silent);
}

/// **Test: Full pipeline with the real extractor against a mock article page on a custom domain.**
#[tokio::test]
async fn test_real_extractor_pipeline() {
    let mut server = mockito::Server::new_async().await;
    let thumb_url = format!("{}/img/capa.jpg", server.url());
    let page = format!(
        r#"<html><body>
            <div class="news-ctn" data-page-title="Prefeito anuncia obra">
              <div class="news-details-image" data-thumb-url="{}"></div>
            </div>
        </body></html>"#,
        thumb_url
    );
    let page_mock = server
        .mock("GET", "/noticia/123")
        .with_status(200)
        .with_body(page)
        .expect(1)
        .create_async()
        .await;
    let thumb_mock = server
        .mock("GET", "/img/capa.jpg")
        .with_status(200)
        .with_body(jpeg(RED, 30, 20))
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::default());
    let handler = ArticleLinkHandler::new(
        bot.clone(),
        Arc::new(ArticleExtractor::new()),
        composer(CardLayout::default()),
    )
    .with_site_domain("127.0.0.1");

    handler
        .handle(&message(Some(&format!("{}/noticia/123", server.url()))))
        .await
        .unwrap();

    let documents = bot.documents();
    assert_eq!(documents.len(), 1);
    let card = decode(&documents[0].bytes);
    assert!(close_to(*card.get_pixel(OVERLAY_SPOT.0, OVERLAY_SPOT.1), RED, 30));
    page_mock.assert_async().await;
    thumb_mock.assert_async().await;
}

/// **Test: Missing template assets: the user is told, no document is sent, the error reaches the chain.**
#[tokio::test]
async fn test_missing_assets_reported() {
    let bot = Arc::new(MockBot::default());
    let articles = Arc::new(ScriptedArticles::new("Obra", None));
    let composer = Arc::new(CardComposer::new(
        CardLayout::default(),
        Arc::new(MissingAssets),
    ));
    let handler = ArticleLinkHandler::new(bot.clone(), articles, composer);

    let err = handler
        .handle(&message(Some(ARTICLE_URL)))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Handler(HandlerError::Compose(_))));
    assert_eq!(
        bot.texts(),
        vec![MSG_PROCESSING.to_string(), MSG_COMPOSE_FAILED.to_string()]
    );
    assert!(bot.documents().is_empty());
}

/// **Test: When the compose-failure notice cannot be delivered, the compose error still reaches the chain.**
#[tokio::test]
async fn test_compose_failure_notice_send_error() {
    let bot = Arc::new(MockBot::failing_text(MSG_COMPOSE_FAILED));
    let articles = Arc::new(ScriptedArticles::new("Obra", None));
    let composer = Arc::new(CardComposer::new(
        CardLayout::default(),
        Arc::new(MissingAssets),
    ));
    let handler = ArticleLinkHandler::new(bot.clone(), articles, composer);

    let err = handler
        .handle(&message(Some(ARTICLE_URL)))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Handler(HandlerError::Compose(_))));
    assert_eq!(bot.texts(), vec![MSG_PROCESSING.to_string()]);
    assert!(bot.documents().is_empty());
}

/// **Test: A failed document send is not swallowed.**
#[tokio::test]
async fn test_send_failure_propagates() {
    let bot = Arc::new(MockBot::failing_documents());
    let articles = Arc::new(ScriptedArticles::new("Obra", None));
    let handler =
        ArticleLinkHandler::new(bot.clone(), articles, composer(CardLayout::default()));

    let err = handler
        .handle(&message(Some(ARTICLE_URL)))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Bot(_)));
    assert_eq!(bot.texts(), vec![MSG_PROCESSING.to_string()]);
}
