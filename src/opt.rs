use std::collections::HashMap;
use std::env;
use std::fmt::Debug;

use lazy_static::lazy_static;

#[derive(strum_macros::Display, Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum DbgFlg {
    #[strum(serialize = "DBG_FLG_API")]
    Api,
    #[strum(serialize = "DBG_FLG_ROUND")]
    Round,
}

lazy_static! {
    pub static ref DBG_FLG_DEFAULTS: HashMap<DbgFlg, bool> =
        HashMap::from([(DbgFlg::Api, false), (DbgFlg::Round, false)]);
}

pub trait DebugIf: Debug {
    fn dbg_if(&self, flg: DbgFlg);
}

impl<T: Debug> DebugIf for T {
    fn dbg_if(&self, flg: DbgFlg) {
        if checkflag(flg) {
            eprintln!("{} {:#?}", utc_now(), self);
        }
    }
}

pub fn log_if(s: &str, flg: DbgFlg) {
    if checkflag(flg) {
        eprintln!("{} [{}] {}", utc_now(), flg, s);
    }
}

fn utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn checkflag(flg: DbgFlg) -> bool {
    flag_enabled(flg, env::var(flg.to_string()).ok().as_deref())
}

fn flag_enabled(flg: DbgFlg, env_value: Option<&str>) -> bool {
    env_value.map_or_else(
        || DBG_FLG_DEFAULTS.get(&flg).copied().unwrap_or(false),
        |s| s == "1" || s == "true",
    )
}
