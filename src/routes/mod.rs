use actix_web::web;

pub mod articles;
pub mod backend_health;
pub mod league;
pub mod matches;
pub mod polls;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(articles::get_articles)
        .service(articles::get_article);

    // `/matches/next` must be registered ahead of `/matches/{slug}`
    cfg.service(matches::get_next_match)
        .service(matches::get_match_report)
        .service(matches::get_fixtures)
        .service(matches::get_results);

    cfg.service(teams::get_all_teams);

    cfg.service(
        web::scope("/league")
            .service(league::get_active_table)
            .service(league::get_table_snapshot)
            .service(league::get_season_table)
    );

    cfg.service(
        web::scope("/polls")
            .service(polls::get_poll)
            .service(polls::cast_vote)
    );
}
