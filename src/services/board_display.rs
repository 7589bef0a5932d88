use crate::domain::board::Group;
use crate::error::AppResult;

pub trait BoardDisplay {
    fn render(&mut self, groups: &[Group]) -> AppResult<()>;
}
