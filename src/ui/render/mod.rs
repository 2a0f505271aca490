mod address_form;
mod all;
mod footer;
mod home;
mod log;
mod notification;

use self::log::log;
use super::*;
use address_form::address_form;
use footer::footer;
use home::home;
use notification::notification;

pub use all::all as render;
