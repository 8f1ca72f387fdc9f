use super::*;

fn device(id: i64, name: &str, external_id: &str, tenant_id: i64) -> Device {
    Device {
        id,
        name: name.to_owned(),
        external_id: external_id.to_owned(),
        tenant_id,
        token: format!("tok-{id}"),
    }
}

fn fleet() -> FleetState {
    let mut state = FleetState::default();
    state.companies.items = vec![
        Company { id: 1, name: "Transportes Norte".to_owned(), slug: "norte".to_owned() },
        Company { id: 2, name: "Logística Sur".to_owned(), slug: "sur".to_owned() },
    ];
    state.devices.items = vec![
        device(10, "Camión 01", "352093081234567", 1),
        device(11, "Camión 02", "352093089999999", 1),
        device(12, "Furgón A", "FMC650-A", 2),
    ];
    state
}

// =============================================================
// ListState
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut list = ListState::<Company> { error: Some("boom".to_owned()), ..ListState::default() };
    list.begin();
    assert!(list.loading);
    assert_eq!(list.error, None);
}

#[test]
fn finish_ok_replaces_items() {
    let mut list = ListState::default();
    list.begin();
    list.finish(Ok(vec![1, 2, 3]));
    assert!(!list.loading);
    assert_eq!(list.items, vec![1, 2, 3]);
}

#[test]
fn finish_err_keeps_previous_items() {
    let mut list = ListState { items: vec![7], ..ListState::default() };
    list.begin();
    list.finish(Err("devices request failed: 500".to_owned()));
    assert!(!list.loading);
    assert_eq!(list.items, vec![7]);
    assert_eq!(list.error.as_deref(), Some("devices request failed: 500"));
}

// =============================================================
// FleetState
// =============================================================

#[test]
fn company_name_lookup() {
    let state = fleet();
    assert_eq!(state.company_name(2), Some("Logística Sur"));
    assert_eq!(state.company_name(99), None);
}

#[test]
fn blank_filter_matches_all() {
    assert_eq!(fleet().filter_devices("   ").len(), 3);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let state = fleet();
    let ids: Vec<i64> = state.filter_devices("camión").iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn filter_matches_external_id() {
    let state = fleet();
    let ids: Vec<i64> = state.filter_devices("fmc650").iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![12]);
}

#[test]
fn filter_without_hits_is_empty() {
    assert!(fleet().filter_devices("zzz").is_empty());
}

#[test]
fn devices_per_company_counts_in_company_order() {
    let mut state = fleet();
    state.companies.items.push(Company { id: 3, name: "Sin flota".to_owned(), slug: "vacia".to_owned() });
    state.devices.items.push(device(13, "Huérfano", "X", 42));
    assert_eq!(
        state.devices_per_company(),
        vec![("Transportes Norte", 2), ("Logística Sur", 1), ("Sin flota", 0)]
    );
}
