use intake_lambda::middleware::audit::pathway_key;

#[test]
fn pathway_routes_carry_their_key() {
    assert_eq!(pathway_key("/pathways/headache"), Some("headache"));
    assert_eq!(pathway_key("/pathways/chestPain/red-flags"), Some("chestPain"));
    assert_eq!(pathway_key("/pathways/rash/visible"), Some("rash"));
}

#[test]
fn other_routes_have_no_key() {
    assert_eq!(pathway_key("/pathways"), None);
    assert_eq!(pathway_key("/pathways/"), None);
    assert_eq!(pathway_key("/pathways/resolve"), None);
    assert_eq!(pathway_key("/health"), None);
    assert_eq!(pathway_key("/questionnaire/submission"), None);
}
