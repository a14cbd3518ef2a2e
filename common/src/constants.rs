/// Default location of the deployment descriptor the portal is bootstrapped with
pub const DEFAULT_DESCRIPTOR_PATH: &str = "./deployment.config.json";
