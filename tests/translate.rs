// Licensed under MIT. See LICENSE for details.

use rcpc::nl::{extract_clauses, to_formula};
use rcpc::render::to_portuguese;
use rcpc::{parse, AcceptAll, AtomMap, Error, Oper, Session, AST};

fn rain() -> AtomMap {
    AtomMap::parse("A=chove\nB=a rua fica molhada")
}

#[test]
fn test_extract_conditional() {
    let clauses = extract_clauses("Se chove então a rua fica molhada");
    assert_eq!(clauses, vec!["chove", "a rua fica molhada"]);
}

#[test]
fn test_map_text_round_trip() {
    let map = rain();
    assert_eq!(AtomMap::parse(&map.to_string()), map);
}

#[test]
fn test_sentence_to_ast() {
    let formula = to_formula("Chove e a rua fica molhada", &rain()).unwrap();
    assert_eq!(formula, "A ∧ B");
    assert_eq!(
        parse(&formula).unwrap(),
        AST::Binary(
            Oper::And,
            Box::new(AST::Identifier(String::from("A"))),
            Box::new(AST::Identifier(String::from("B"))),
        )
    );
}

#[test]
fn test_both_directions() {
    let mut session = Session::new();
    let formula = session
        .to_formula("Se chove, então a rua fica molhada.", &mut AcceptAll)
        .unwrap()
        .unwrap();
    assert_eq!(session.normalize(&formula).unwrap(), "A → B");
    assert_eq!(
        session.to_portuguese(&formula).unwrap(),
        "Se chove, então a rua fica molhada"
    );
}

#[test]
fn test_formula_to_sentence_and_back() {
    let atoms = AtomMap::parse("A=estudo\nB=passo na prova");
    let ast = parse("A ∧ ¬B").unwrap();
    let sentence = to_portuguese(&ast, &atoms).unwrap();
    assert_eq!(sentence, "estudo e Não é verdade que passo na prova");

    let formula = to_formula(&sentence, &atoms).unwrap();
    assert_eq!(formula, "A ∧ ¬B");
    assert_eq!(parse(&formula).unwrap(), ast);
}

#[test]
fn test_empty_map_both_directions() {
    let empty = AtomMap::new();
    assert!(matches!(
        to_formula("Chove e a rua fica molhada", &empty),
        Err(Error::EmptyMap)
    ));
    assert!(matches!(
        to_portuguese(&parse("A ∧ B").unwrap(), &empty),
        Err(Error::EmptyMap)
    ));
}
