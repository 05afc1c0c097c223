mod provider_registry;
