//! The expression grammar after left-recursion elimination, as data.
//!
//! The parser hard-codes these productions as functions; this module states
//! them as a table and derives the FIRST and FOLLOW sets from it, which is how
//! the grammar is shown to be LL(1).

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Write as _,
};

use crate::interpreter::lexer::TokenKind;

/// A non-terminal of the expression grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NonTerminal {
    /// `E`
    Expr,
    /// `E'`
    ExprTail,
    /// `T`
    Term,
    /// `T'`
    TermTail,
    /// `F`
    Factor,
}

impl NonTerminal {
    /// All non-terminals, start symbol first.
    pub const ALL: [Self; 5] = [Self::Expr, Self::ExprTail, Self::Term, Self::TermTail, Self::Factor];
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Expr => "E",
            Self::ExprTail => "E'",
            Self::Term => "T",
            Self::TermTail => "T'",
            Self::Factor => "F",
        };
        write!(f, "{name}")
    }
}

/// A symbol on the right-hand side of a production.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrammarSymbol {
    /// A token kind.
    Terminal(TokenKind),
    /// A non-terminal.
    NonTerminal(NonTerminal),
    /// The empty string. Only appears in FIRST sets; an ε-production has an
    /// empty body.
    Epsilon,
}

impl std::fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminal(kind) => write!(f, "{kind}"),
            Self::NonTerminal(non_terminal) => write!(f, "{non_terminal}"),
            Self::Epsilon => write!(f, "ε"),
        }
    }
}

/// One production `head → body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// Left-hand side.
    pub head: NonTerminal,
    /// Right-hand side; empty for `head → ε`.
    pub body: Vec<GrammarSymbol>,
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → ", self.head)?;
        if self.body.is_empty() {
            return write!(f, "{}", GrammarSymbol::Epsilon);
        }
        let body: Vec<String> = self.body.iter().map(ToString::to_string).collect();
        write!(f, "{}", body.join(" "))
    }
}

/// FIRST set of every non-terminal; contains [`GrammarSymbol::Epsilon`] for
/// nullable ones.
pub type FirstSets = BTreeMap<NonTerminal, BTreeSet<GrammarSymbol>>;
/// FOLLOW set of every non-terminal. `EOF` marks the end of input.
pub type FollowSets = BTreeMap<NonTerminal, BTreeSet<TokenKind>>;

/// Returns the production table.
#[must_use]
pub fn productions() -> Vec<Production> {
    use GrammarSymbol::{NonTerminal as N, Terminal as Tk};
    use NonTerminal::{Expr, ExprTail, Factor, Term, TermTail};

    let production = |head, body: &[GrammarSymbol]| Production { head,
                                                                  body: body.to_vec() };
    vec![production(Expr, &[N(Term), N(ExprTail)]),
         production(ExprTail, &[Tk(TokenKind::Plus), N(Term), N(ExprTail)]),
         production(ExprTail, &[Tk(TokenKind::Minus), N(Term), N(ExprTail)]),
         production(ExprTail, &[]),
         production(Term, &[N(Factor), N(TermTail)]),
         production(TermTail, &[Tk(TokenKind::Star), N(Factor), N(TermTail)]),
         production(TermTail, &[Tk(TokenKind::Slash), N(Factor), N(TermTail)]),
         production(TermTail, &[]),
         production(Factor, &[Tk(TokenKind::LParen), N(Expr), Tk(TokenKind::RParen)]),
         production(Factor, &[Tk(TokenKind::Num)]),
         production(Factor, &[Tk(TokenKind::Id)])]
}

/// FIRST of a sequence of symbols, given the FIRST sets computed so far.
fn first_of_sequence(sequence: &[GrammarSymbol], first: &FirstSets) -> BTreeSet<GrammarSymbol> {
    let mut result = BTreeSet::new();
    for symbol in sequence {
        match symbol {
            GrammarSymbol::Terminal(_) => {
                result.insert(*symbol);
                return result;
            },
            GrammarSymbol::NonTerminal(non_terminal) => {
                let Some(set) = first.get(non_terminal) else {
                    return result;
                };
                result.extend(set.iter().filter(|s| **s != GrammarSymbol::Epsilon));
                if !set.contains(&GrammarSymbol::Epsilon) {
                    return result;
                }
            },
            GrammarSymbol::Epsilon => {},
        }
    }
    result.insert(GrammarSymbol::Epsilon);
    result
}

/// Computes the FIRST sets by fixpoint iteration over [`productions`].
#[must_use]
pub fn first_sets() -> FirstSets {
    let productions = productions();
    let mut first: FirstSets = NonTerminal::ALL.iter()
                                               .map(|n| (*n, BTreeSet::new()))
                                               .collect();
    let mut changed = true;
    while changed {
        changed = false;
        for production in &productions {
            let additions = first_of_sequence(&production.body, &first);
            let set = first.entry(production.head).or_default();
            let before = set.len();
            set.extend(additions);
            changed |= set.len() != before;
        }
    }
    first
}

/// Computes the FOLLOW sets by fixpoint iteration over [`productions`].
///
/// `E` is the start symbol, so `EOF` is in FOLLOW(E).
#[must_use]
pub fn follow_sets() -> FollowSets {
    let productions = productions();
    let first = first_sets();
    let mut follow: FollowSets = NonTerminal::ALL.iter()
                                                 .map(|n| (*n, BTreeSet::new()))
                                                 .collect();
    follow.entry(NonTerminal::Expr).or_default().insert(TokenKind::Eof);

    let mut changed = true;
    while changed {
        changed = false;
        for production in &productions {
            for (i, symbol) in production.body.iter().enumerate() {
                let GrammarSymbol::NonTerminal(target) = symbol else {
                    continue;
                };
                let rest = first_of_sequence(&production.body[i + 1..], &first);
                let mut additions: BTreeSet<TokenKind> =
                    rest.iter()
                        .filter_map(|s| match s {
                            GrammarSymbol::Terminal(kind) => Some(*kind),
                            _ => None,
                        })
                        .collect();
                if rest.contains(&GrammarSymbol::Epsilon)
                   && let Some(head_follow) = follow.get(&production.head)
                {
                    additions.extend(head_follow.iter().copied());
                }

                let set = follow.entry(*target).or_default();
                let before = set.len();
                set.extend(additions);
                changed |= set.len() != before;
            }
        }
    }
    follow
}

/// Checks the LL(1) condition for every non-terminal.
///
/// The alternatives of a non-terminal must have pairwise disjoint FIRST sets,
/// at most one of them may be nullable, and if one is, FIRST of the others
/// must be disjoint from FOLLOW of the non-terminal.
#[must_use]
pub fn is_ll1() -> bool {
    let productions = productions();
    let first = first_sets();
    let follow = follow_sets();

    NonTerminal::ALL.iter().all(|head| {
        let alternatives: Vec<BTreeSet<GrammarSymbol>> =
            productions.iter()
                       .filter(|p| p.head == *head)
                       .map(|p| first_of_sequence(&p.body, &first))
                       .collect();
        let nullable = alternatives.iter()
                                   .filter(|set| set.contains(&GrammarSymbol::Epsilon))
                                   .count();
        if nullable > 1 {
            return false;
        }

        let mut seen = BTreeSet::new();
        for set in &alternatives {
            for symbol in set.iter().filter(|s| **s != GrammarSymbol::Epsilon) {
                if !seen.insert(*symbol) {
                    return false;
                }
            }
        }

        nullable == 0
        || follow.get(head).is_none_or(|follow| {
                                           follow.iter()
                                                 .all(|kind| !seen.contains(&GrammarSymbol::Terminal(*kind)))
                                       })
    })
}

/// Renders the production table and the FIRST and FOLLOW sets.
#[must_use]
pub fn format_grammar() -> String {
    let mut out = String::new();
    let productions = productions();

    out.push_str("PRODUCTIONS\n");
    for head in NonTerminal::ALL {
        let alternatives: Vec<String> =
            productions.iter()
                       .filter(|p| p.head == head)
                       .map(|p| {
                           let text = p.to_string();
                           text.split_once(" → ")
                               .map_or_else(|| text.clone(), |(_, body)| body.to_string())
                       })
                       .collect();
        let _ = writeln!(out, "  {:<2} → {}", head.to_string(), alternatives.join(" | "));
    }

    out.push_str("FIRST\n");
    for (head, set) in first_sets() {
        let items: Vec<String> = set.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "  FIRST({head}) = {{ {} }}", items.join(", "));
    }

    out.push_str("FOLLOW\n");
    for (head, set) in follow_sets() {
        let items: Vec<String> = set.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "  FOLLOW({head}) = {{ {} }}", items.join(", "));
    }

    out
}
