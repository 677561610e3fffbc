pub mod alert;
pub mod alert_dialog;
pub mod badge;
pub mod bar_list;
pub mod button;
pub mod card;
pub mod data_table;
pub mod dialog;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod loading;
pub mod page_header;
pub mod stat_card;
pub mod tabs;
pub mod textarea;
pub mod toast;

pub use alert::*;
pub use alert_dialog::*;
pub use badge::*;
pub use bar_list::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use loading::*;
pub use page_header::*;
pub use stat_card::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
