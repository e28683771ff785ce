//! Unit tests for placeholder art generation

use dreamcraft::art::{
    data_url, generator, ArtProvider, ArtRequest, ArtSpec, Aspect, PlaceholderProvider,
    MAX_PROMPT_CHARS,
};

fn svg_of(image: &str) -> String {
    String::from_utf8(data_url::decode(image).unwrap()).unwrap()
}

async fn generate(
    prompt: &str,
    style: Option<&str>,
    aspect: Option<&str>,
) -> dreamcraft::art::ArtResult {
    let request = ArtRequest {
        prompt: prompt.to_string(),
        style: style.map(String::from),
        aspect: aspect.map(String::from),
    };
    PlaceholderProvider.generate(ArtSpec::from(request)).await.unwrap()
}

#[tokio::test]
async fn test_identical_inputs_give_identical_artifacts() {
    let first = generate("lantern festival", Some("watercolor"), Some("3:4")).await;
    let second = generate("lantern festival", Some("watercolor"), Some("3:4")).await;
    assert_eq!(first, second);
    assert_eq!(data_url::format_of(&first.image), Some("svg+xml"));
}

#[tokio::test]
async fn test_canvas_follows_aspect() {
    let cases = [
        (Some("16:9"), r#"width="1280" height="720""#),
        (Some("3:4"), r#"width="960" height="1280""#),
        (Some("1:1"), r#"width="1024" height="1024""#),
        (Some("banana"), r#"width="1024" height="1024""#),
        (None, r#"width="1024" height="1024""#),
    ];

    for (aspect, expected) in cases {
        let result = generate("koi pond", None, aspect).await;
        assert!(
            svg_of(&result.image).contains(expected),
            "aspect {:?} should render {}",
            aspect,
            expected
        );
    }
}

#[tokio::test]
async fn test_gradient_uses_seed_colours() {
    let result = generate("koi pond", Some("ink"), Some("1:1")).await;
    let seed = generator::seed_hex(&generator::seed("koi pond", "ink", "1:1"));
    let svg = svg_of(&result.image);

    assert!(svg.contains(&format!("stop-color=\"#{}\"", &seed[0..6])));
    assert!(svg.contains(&format!("stop-color=\"#{}\"", &seed[6..12])));
    assert!(svg.contains(&format!("stop-color=\"#{}\"", &seed[12..18])));
}

#[tokio::test]
async fn test_changing_any_input_changes_image() {
    let base = generate("koi pond", Some("ink"), Some("1:1")).await.image;
    assert_ne!(base, generate("koi ponds", Some("ink"), Some("1:1")).await.image);
    assert_ne!(base, generate("koi pond", Some("clay"), Some("1:1")).await.image);
    assert_ne!(base, generate("koi pond", Some("ink"), Some("1-1")).await.image);
}

#[tokio::test]
async fn test_long_prompt_is_truncated_in_image_only() {
    let prompt = "m".repeat(MAX_PROMPT_CHARS + 20);
    let result = generate(&prompt, None, None).await;

    assert_eq!(result.prompt, prompt);
    let svg = svg_of(&result.image);
    assert!(svg.contains(&format!(">{}<", "m".repeat(MAX_PROMPT_CHARS))));
    assert!(!svg.contains(&"m".repeat(MAX_PROMPT_CHARS + 1)));
}

#[tokio::test]
async fn test_style_caption() {
    let result = generate("owl", Some("neon"), None).await;
    assert!(svg_of(&result.image).contains("style: neon"));
}

#[test]
fn test_aspect_aliases() {
    assert_eq!(Aspect::parse("16-9"), Aspect::Wide);
    assert_eq!(Aspect::parse("3-4"), Aspect::Portrait);
    assert_eq!(Aspect::parse("4:3"), Aspect::Square);
}
