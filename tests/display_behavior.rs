use newsdesk_core::{ArticleDisplay, NewsArticle};

fn bare_article() -> NewsArticle {
    NewsArticle {
        title: String::from("Headline A"),
        description: None,
        author: None,
        url_to_image: None,
        url: None,
        published_at: None,
    }
}

#[test]
fn display_serializes_with_generated_id_and_empty_defaults() {
    let display = ArticleDisplay::from_article(&bare_article());
    let value = serde_json::to_value(&display).expect("display should serialize");

    assert_eq!(value["title"], "Headline A");
    assert_eq!(value["description"], "");
    assert_eq!(value["author"], "");
    assert!(value["image_url"].is_null());
    assert!(value["id"].is_string());
}

#[test]
fn valid_image_link_serializes_as_a_string_url() {
    let article = NewsArticle {
        url_to_image: Some(String::from("https://cdn.example.test/a.png")),
        ..bare_article()
    };

    let display = ArticleDisplay::from_article(&article);
    let value = serde_json::to_value(&display).expect("display should serialize");

    assert_eq!(value["image_url"], "https://cdn.example.test/a.png");
}

#[test]
fn whitespace_only_image_link_is_dropped() {
    let article = NewsArticle {
        url_to_image: Some(String::from("   ")),
        ..bare_article()
    };

    let display = ArticleDisplay::from_article(&article);
    assert_eq!(display.image_url, None);
}
