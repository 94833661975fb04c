use crate::errors::SummaryResult;

pub trait Parser {
    type Output;

    fn parse(&self, content: &str) -> SummaryResult<Vec<Self::Output>>;
}
