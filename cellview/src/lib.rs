pub mod cell;
pub mod column;
pub mod error;
pub mod focus;
pub mod header;
pub mod row_style;
pub mod scheduler;
pub mod table;

pub use error::CellViewError;
pub use table::CellTable;

pub mod prelude {
    pub use crate::cell::{Cell, SafeHtmlCell, TextCell};
    pub use crate::column::{AnyColumn, Column, FieldColumn, IdentityColumn, TextColumn};
    pub use crate::error::CellViewError;
    pub use crate::focus::{FocusHandle, reset_focus};
    pub use crate::header::{AnyHeader, Header, SafeHtmlHeader, TextHeader};
    pub use crate::row_style::RowStyles;
    pub use crate::scheduler::{
        CommandQueue, DeferredScheduler, ScheduledCommand, Scheduler, command_channel,
    };
    pub use crate::table::{CellTable, TableId, TableStyle};

    pub use markup::{SafeHtml, SafeHtmlBuilder, escape_html};
}
