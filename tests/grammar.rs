use std::collections::BTreeSet;

use attrcalc::{
    TokenKind,
    interpreter::grammar::{
        GrammarSymbol, NonTerminal, first_sets, follow_sets, format_grammar, is_ll1, productions,
    },
};

fn terminals(kinds: &[TokenKind]) -> BTreeSet<GrammarSymbol> {
    kinds.iter().map(|kind| GrammarSymbol::Terminal(*kind)).collect()
}

#[test]
fn production_table() {
    let table = productions();
    assert_eq!(table.len(), 11);
    assert_eq!(table[0].to_string(), "E → T E'");
    assert_eq!(table[1].to_string(), "E' → '+' T E'");
    assert_eq!(table[3].to_string(), "E' → ε");
    assert_eq!(table[8].to_string(), "F → '(' E ')'");
}

#[test]
fn first_sets_of_the_transformed_grammar() {
    let first = first_sets();
    let atoms = terminals(&[TokenKind::LParen, TokenKind::Num, TokenKind::Id]);

    assert_eq!(first[&NonTerminal::Expr], atoms);
    assert_eq!(first[&NonTerminal::Term], atoms);
    assert_eq!(first[&NonTerminal::Factor], atoms);

    let mut expr_tail = terminals(&[TokenKind::Plus, TokenKind::Minus]);
    expr_tail.insert(GrammarSymbol::Epsilon);
    assert_eq!(first[&NonTerminal::ExprTail], expr_tail);

    let mut term_tail = terminals(&[TokenKind::Star, TokenKind::Slash]);
    term_tail.insert(GrammarSymbol::Epsilon);
    assert_eq!(first[&NonTerminal::TermTail], term_tail);
}

#[test]
fn follow_sets_of_the_transformed_grammar() {
    let follow = follow_sets();
    let set = |kinds: &[TokenKind]| kinds.iter().copied().collect::<BTreeSet<_>>();

    assert_eq!(follow[&NonTerminal::Expr], set(&[TokenKind::RParen, TokenKind::Eof]));
    assert_eq!(follow[&NonTerminal::ExprTail], set(&[TokenKind::RParen, TokenKind::Eof]));
    assert_eq!(follow[&NonTerminal::Term],
               set(&[TokenKind::Plus, TokenKind::Minus, TokenKind::RParen, TokenKind::Eof]));
    assert_eq!(follow[&NonTerminal::TermTail],
               set(&[TokenKind::Plus, TokenKind::Minus, TokenKind::RParen, TokenKind::Eof]));
    assert_eq!(follow[&NonTerminal::Factor],
               set(&[TokenKind::Plus,
                     TokenKind::Minus,
                     TokenKind::Star,
                     TokenKind::Slash,
                     TokenKind::RParen,
                     TokenKind::Eof]));
}

#[test]
fn the_grammar_is_ll1() {
    assert!(is_ll1());
}

#[test]
fn grammar_listing() {
    let listing = format_grammar();
    assert!(listing.starts_with("PRODUCTIONS\n"));
    assert!(listing.contains("  E' → '+' T E' | '-' T E' | ε\n"));
    assert!(listing.contains("  F  → '(' E ')' | NUM | ID\n"));
    assert!(listing.contains("  FIRST(F) = { NUM, ID, '(' }\n"));
    assert!(listing.contains("  FOLLOW(E) = { ')', EOF }\n"));
}
