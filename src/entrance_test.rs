use super::*;

#[test]
fn plan_order_is_nav_then_hero() {
    let steps = plan(&PageConfig::default());
    let selectors: Vec<&str> = steps.iter().map(|s| s.selector.as_str()).collect();
    assert_eq!(selectors, vec!["nav", "#home h2", "#home h1", "#home p"]);
}

#[test]
fn nav_slides_and_hero_fades_up() {
    let steps = plan(&PageConfig::default());
    assert!(steps[0].animation.starts_with("slideDown"));
    assert!(steps[1..].iter().all(|s| s.animation.starts_with("fadeInUp")));
}

#[test]
fn hero_delays_increase() {
    let steps = plan(&PageConfig::default());
    assert!(!steps[1].animation.contains("0.2s"));
    assert!(steps[2].animation.contains("0.2s forwards"));
    assert!(steps[3].animation.contains("0.4s forwards"));
}

#[test]
fn plan_follows_configured_hero() {
    let config = PageConfig { hero_id: "landing".into(), ..PageConfig::default() };
    assert_eq!(plan(&config)[2].selector, "#landing h1");
}
