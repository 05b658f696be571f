use super::*;

#[test]
fn builtin_contains_sample_creators() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.len(), 3);
    let demo = registry.get("demo_user").expect("demo_user should be registered");
    assert_eq!(demo.name, "John Doe");
    assert_eq!(demo.stats.total_likes, 145_230);
    assert_eq!(demo.stats.total_views, 892_340);
    assert_eq!(demo.niche.secondary, vec!["AI", "SaaS"]);
}

#[test]
fn builtin_platforms_iterate_in_declaration_order() {
    let registry = ProfileRegistry::builtin();
    let sarah = registry.get("sarah_c").unwrap();
    let order: Vec<Platform> = sarah.platforms.keys().copied().collect();
    assert_eq!(
        order,
        vec![Platform::Instagram, Platform::Youtube, Platform::Tiktok]
    );
}

#[test]
fn builtin_is_shared() {
    let a = ProfileRegistry::builtin();
    let b = ProfileRegistry::builtin();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn display_name_capitalizes_each_segment() {
    assert_eq!(display_name_from_username("jane_doe"), "Jane Doe");
    assert_eq!(display_name_from_username("alice"), "Alice");
    assert_eq!(display_name_from_username("mr_x_y"), "Mr X Y");
}

#[test]
fn display_name_leaves_rest_of_segment_untouched() {
    assert_eq!(display_name_from_username("mcDONALD_jr"), "McDONALD Jr");
}

#[test]
fn display_name_handles_empty_segments() {
    assert_eq!(display_name_from_username("a__b"), "A  B");
    assert_eq!(display_name_from_username(""), "");
}

#[test]
fn display_name_handles_non_ascii() {
    assert_eq!(display_name_from_username("élodie_ß"), "Élodie SS");
}

#[test]
fn resolve_known_username_borrows() {
    let registry = ProfileRegistry::builtin();
    let resolved = registry.resolve("tech_guru");
    assert!(matches!(resolved, Cow::Borrowed(_)));
    assert_eq!(resolved.name, "Alex Tech Explorer");
}

#[test]
fn resolve_unknown_username_synthesizes_default() {
    let registry = ProfileRegistry::builtin();
    let resolved = registry.resolve("jane_doe");
    assert!(matches!(resolved, Cow::Owned(_)));
    assert_eq!(resolved.name, "Jane Doe");
    assert_eq!(resolved.id, "fallback-jane_doe");
    assert_eq!(resolved.stats.total_likes, 10_000);
    assert_eq!(resolved.stats.total_views, 50_000);
    assert_eq!(resolved.stats.engagement_rate, "5.0%");
    let ig = resolved.platform(Platform::Instagram).unwrap();
    assert_eq!(ig.followers, 5_000);
    assert!((ig.growth - 2.5).abs() < f64::EPSILON);
}

#[test]
fn fallback_profile_is_deterministic() {
    assert_eq!(fallback_profile("x_y"), fallback_profile("x_y"));
}

#[test]
fn empty_registry_resolves_everything_to_defaults() {
    let registry = ProfileRegistry::default();
    assert!(registry.is_empty());
    assert_eq!(registry.resolve("demo_user").id, "fallback-demo_user");
}

#[test]
fn custom_registry_from_profiles() {
    let registry = ProfileRegistry::from_profiles([("someone", fallback_profile("someone"))]);
    assert_eq!(registry.usernames().collect::<Vec<_>>(), vec!["someone"]);
}

#[test]
fn profile_serializes_platforms_by_wire_name() {
    let registry = ProfileRegistry::builtin();
    let json = serde_json::to_value(registry.get("demo_user").unwrap()).unwrap();
    assert_eq!(json["platforms"]["youtube"]["followers"], 128_900);
    assert_eq!(json["stats"]["engagement_rate"], "8.5%");
}
