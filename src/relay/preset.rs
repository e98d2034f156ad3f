//! Fixed content injected into every relayed configuration.
//!
//! Both the proxy descriptor and the rule block are process-wide constants.
//! Fresh `serde_yaml::Value`s are built from them per request so the
//! document being patched never shares data with another request.

use serde_yaml::{Mapping, Value};

/// Name of the injected proxy; every preset rule routes to it.
pub const PROXY_NAME: &str = "SG_AZURE";

/// Field set of the injected proxy, in emission order.
pub const PROXY_FIELDS: [(&str, &str); 8] = [
    ("type", "vmess"),
    ("name", PROXY_NAME),
    ("server", "xxxxxxxx"),
    ("port", "xxxxxxxx"),
    ("uuid", "xxxxxxxx"),
    ("alterId", "0"),
    ("cipher", "auto"),
    ("network", "tcp"),
];

/// Rules placed ahead of whatever the upstream document already routes.
pub const RULES: [&str; 30] = [
    "DOMAIN,browser-intake-datadoghq.com,SG_AZURE",
    "DOMAIN,chat.openai.com.cdn.cloudflare.net,SG_AZURE",
    "DOMAIN,openai-api.arkoselabs.com,SG_AZURE",
    "DOMAIN,openaicom-api-bdcpf8c6d2e9atf6.z01.azurefd.net,SG_AZURE",
    "DOMAIN,openaicomproductionae4b.blob.core.windows.net,SG_AZURE",
    "DOMAIN,production-openaicom-storage.azureedge.net,SG_AZURE",
    "DOMAIN,static.cloudflareinsights.com,SG_AZURE",
    "DOMAIN-SUFFIX,ai.com,SG_AZURE",
    "DOMAIN-SUFFIX,algolia.net,SG_AZURE",
    "DOMAIN-SUFFIX,api.statsig.com,SG_AZURE",
    "DOMAIN-SUFFIX,auth0.com,SG_AZURE",
    "DOMAIN-SUFFIX,chatgpt.com,SG_AZURE",
    "DOMAIN-SUFFIX,chatgpt.livekit.cloud,SG_AZURE",
    "DOMAIN-SUFFIX,client-api.arkoselabs.com,SG_AZURE",
    "DOMAIN-SUFFIX,events.statsigapi.net,SG_AZURE",
    "DOMAIN-SUFFIX,featuregates.org,SG_AZURE",
    "DOMAIN-SUFFIX,host.livekit.cloud,SG_AZURE",
    "DOMAIN-SUFFIX,identrust.com,SG_AZURE",
    "DOMAIN-SUFFIX,intercom.io,SG_AZURE",
    "DOMAIN-SUFFIX,intercomcdn.com,SG_AZURE",
    "DOMAIN-SUFFIX,launchdarkly.com,SG_AZURE",
    "DOMAIN-SUFFIX,oaiusercontent.com,SG_AZURE",
    "DOMAIN-SUFFIX,observeit.net,SG_AZURE",
    "DOMAIN-SUFFIX,openai.com,SG_AZURE",
    "DOMAIN-SUFFIX,openaiapi-site.azureedge.net,SG_AZURE",
    "DOMAIN-SUFFIX,openaicom.imgix.net,SG_AZURE",
    "DOMAIN-SUFFIX,segment.io,SG_AZURE",
    "DOMAIN-SUFFIX,sentry.io,SG_AZURE",
    "DOMAIN-SUFFIX,stripe.com,SG_AZURE",
    "DOMAIN-SUFFIX,turn.livekit.cloud,SG_AZURE",
];

/// Build the proxy descriptor as a YAML mapping.
pub fn proxy_entry() -> Value {
    let mut entry = Mapping::with_capacity(PROXY_FIELDS.len());
    for (key, value) in PROXY_FIELDS {
        entry.insert(Value::from(key), Value::from(value));
    }
    Value::Mapping(entry)
}

/// Build the rule block as a list of YAML strings, order preserved.
pub fn rule_sequence() -> Vec<Value> {
    RULES.iter().map(|rule| Value::from(*rule)).collect()
}
