#[derive(Parser)]
#[grammar = "grammar.pest"]
pub(crate) struct TypeGrammar;
