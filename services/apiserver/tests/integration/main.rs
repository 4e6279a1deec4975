mod helpers;

mod deck_test;
mod game_battle_test;
mod list_query_test;
mod official_event_test;
mod record_test;
