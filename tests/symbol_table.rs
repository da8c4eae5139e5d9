use attrcalc::{SymbolTable, SymbolType};

#[test]
fn new_table_is_empty() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.lookup("x").is_none());
}

#[test]
fn insert_overwrites_unconditionally() {
    let mut table = SymbolTable::new();
    table.insert("x", SymbolType::Float, 1.0, 1);
    table.insert("x", SymbolType::Float, -7.5, 9);

    let x = table.lookup("x").unwrap();
    assert_eq!(x.name, "x");
    assert_eq!(x.value, -7.5);
    assert_eq!(x.line, 9);
    assert_eq!(table.len(), 1);
}

#[test]
fn update_only_touches_existing_entries() {
    let mut table = SymbolTable::new();
    table.insert("x", SymbolType::Float, 1.0, 3);

    assert!(table.update("x", 2.0));
    assert!(!table.update("y", 2.0));

    let x = table.lookup("x").unwrap();
    assert_eq!((x.value, x.line), (2.0, 3));
    assert!(table.lookup("y").is_none());
}

#[test]
fn iteration_is_ordered_by_name() {
    let mut table = SymbolTable::new();
    table.insert("zeta", SymbolType::Float, 1.0, 1);
    table.insert("alpha", SymbolType::Float, 2.0, 2);
    table.insert("mid", SymbolType::Float, 3.0, 3);

    let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn type_tag_display() {
    assert_eq!(SymbolType::Float.to_string(), "float");
    assert_eq!(SymbolType::default(), SymbolType::Float);
}
