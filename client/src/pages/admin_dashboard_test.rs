use super::*;

#[test]
fn quick_links_skip_login_and_dashboard() {
    let paths: Vec<&str> = quick_links().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/empresas", "/mantenimiento", "/dispositivos", "/reportes", "/alertas"]);
}

#[test]
fn count_label_hides_count_while_loading() {
    assert_eq!(count_label(true, 3), "…");
    assert_eq!(count_label(false, 3), "3");
    assert_eq!(count_label(false, 0), "0");
}
