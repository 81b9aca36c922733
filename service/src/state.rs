use std::sync::Arc;

use common::convert::ConvertService;
use common::provider::{CloudConvertClient, IConvertProvider};
use common::util::state::RelaySettings;

pub type Services = Arc<ServiceCollection>;

pub struct ServiceCollection {
    pub convert_service: ConvertService,
}

impl ServiceCollection {
    pub fn build(settings: &RelaySettings) -> Services {
        let client = reqwest::Client::new();
        let provider: Arc<dyn IConvertProvider> = Arc::new(CloudConvertClient::new(settings, client.clone()));
        Arc::new(ServiceCollection {
            convert_service: ConvertService::new(provider, client),
        })
    }
}
