use std::{fmt, io};

use ratatui::widgets::Block;
use ratatui::{layout::Rect, text::Line, Frame};

use crate::model::region::Region;
use crate::service::{
    config::ApiConfig,
    data_manager::{DataManager, DataRetrievalError},
};

pub mod repl;
pub mod views;

pub type TextCreationResult = Result<Vec<Line<'static>>, ViewError>;
type ViewResult = Result<(), ViewError>;

/// One submitted search.
pub struct Query {
    pub player_name: String,
    pub region: &'static Region,
}

/// Everything a view factory needs to build its lines.
pub struct Controller<'a> {
    pub manager: &'a DataManager,
    pub config: &'a ApiConfig,
    pub query: &'a Query,
}

pub struct RenderContext<'a, 'b> {
    pub frame: &'a mut Frame<'b>,
    pub area: Rect,
    pub scroll_offset: u16,
    pub block: Block<'b>,
}

#[derive(Debug)]
pub enum ViewError {
    ManagerFailed(DataRetrievalError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewError::ManagerFailed(err) => write!(f, "Data manager error: {}", err),
        }
    }
}

impl From<DataRetrievalError> for ViewError {
    fn from(error: DataRetrievalError) -> Self {
        ViewError::ManagerFailed(error)
    }
}

#[derive(Debug)]
pub enum ReplError {
    Console(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Console(err) => write!(f, "Console error: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Console(error)
    }
}
