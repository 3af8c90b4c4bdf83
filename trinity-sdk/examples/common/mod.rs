use trinity_sdk::{HttpGateway, HttpGatewayOptions};

pub fn get_gateway() -> HttpGateway {
    HttpGateway::new(HttpGatewayOptions {
        base_url: std::env::var("TRINITY_BASE_URL").ok(),
        ..Default::default()
    })
}
