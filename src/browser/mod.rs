pub mod steamcommunity;
