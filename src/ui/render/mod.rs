mod all;
mod draft;
mod filters;
mod footer;
mod header;
mod log;
mod task_list;

use self::log::log;
use super::*;
use draft::draft;
use filters::filters;
use footer::footer;
use header::header;
use task_list::task_list;

pub use all::all as render;
