//! Typed wrappers over [`JsonRpcClient::call`].
//!
//! Each wrapper fixes the remote method name, passes its string arguments
//! as positional parameters and decodes the result. Commands without a
//! meaningful result report [`OK`].

use kamrpc_protocol::{AorLookup, OK, Params, RegistrationInfo, UlDump};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::JsonRpcClient;
use crate::error::{RpcError, RpcResult};

/// Remote method names.
pub mod method {
    pub const CORE_ECHO: &str = "core.echo";
    pub const UAC_REG_ENABLE: &str = "uac.reg_enable";
    pub const UAC_REG_DISABLE: &str = "uac.reg_disable";
    pub const UAC_REG_RELOAD: &str = "uac.reg_reload";
    pub const UAC_REG_REFRESH: &str = "uac.reg_refresh";
    pub const UAC_REG_INFO: &str = "uac.reg_info";
    pub const DOMAIN_RELOAD: &str = "domain.reload";
    pub const UL_DUMP: &str = "ul.dump";
    pub const UL_LOOKUP: &str = "ul.lookup";
}

fn string_params<I, S>(params: I) -> Params
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Params::List(params.into_iter().map(Into::into).collect())
}

impl JsonRpcClient {
    /// Calls `method` and decodes its result into `T`.
    pub async fn call_decoded<T: DeserializeOwned>(
        &self,
        method: &str,
        params: impl Into<Params>,
    ) -> RpcResult<T> {
        let raw = self.call(method, params).await?;
        raw.decode().map_err(|e| {
            debug!(method = %method, error = %e, "Failed to decode result");
            RpcError::decode(e)
        })
    }

    /// Calls `method`, discards its result and reports [`OK`].
    pub async fn call_command(
        &self,
        method: &str,
        params: impl Into<Params>,
    ) -> RpcResult<&'static str> {
        self.call(method, params).await?;
        Ok(OK)
    }

    /// `core.echo`: returns its parameters.
    pub async fn core_echo<I, S>(&self, params: I) -> RpcResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_decoded(method::CORE_ECHO, string_params(params))
            .await
    }

    /// `uac.reg_enable`: enables a remote registration.
    ///
    /// Typically `["l_uuid", "<uuid>"]`.
    pub async fn uac_reg_enable<I, S>(&self, params: I) -> RpcResult<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_command(method::UAC_REG_ENABLE, string_params(params))
            .await
    }

    /// `uac.reg_disable`: disables a remote registration.
    pub async fn uac_reg_disable<I, S>(&self, params: I) -> RpcResult<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_command(method::UAC_REG_DISABLE, string_params(params))
            .await
    }

    /// `uac.reg_reload`: reloads the registration table from the database.
    pub async fn uac_reg_reload<I, S>(&self, params: I) -> RpcResult<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_command(method::UAC_REG_RELOAD, string_params(params))
            .await
    }

    /// `uac.reg_refresh`: reloads one registration record.
    pub async fn uac_reg_refresh<I, S>(&self, params: I) -> RpcResult<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_command(method::UAC_REG_REFRESH, string_params(params))
            .await
    }

    /// `uac.reg_info`: fetches one registration record.
    pub async fn uac_reg_info<I, S>(&self, params: I) -> RpcResult<RegistrationInfo>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_decoded(method::UAC_REG_INFO, string_params(params))
            .await
    }

    /// `domain.reload`: reloads the domain table.
    pub async fn domain_reload<I, S>(&self, params: I) -> RpcResult<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_command(method::DOMAIN_RELOAD, string_params(params))
            .await
    }

    /// `ul.dump`: dumps every location table.
    pub async fn ul_dump<I, S>(&self, params: I) -> RpcResult<UlDump>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_decoded(method::UL_DUMP, string_params(params))
            .await
    }

    /// `ul.lookup`: looks up one address-of-record, e.g. `["location", "alice"]`.
    pub async fn ul_lookup<I, S>(&self, params: I) -> RpcResult<AorLookup>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_decoded(method::UL_LOOKUP, string_params(params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use kamrpc_protocol::ProtocolError;
    use serde_json::json;

    use super::*;
    use crate::stub_server::StubServer;

    fn respond(
        result: serde_json::Value,
    ) -> impl Fn(&kamrpc_protocol::Request) -> (u16, String) + Send + Sync + 'static {
        move |req: &kamrpc_protocol::Request| {
            let body = json!({"jsonrpc": "2.0", "id": req.id, "result": result.clone()});
            (200, body.to_string())
        }
    }

    #[tokio::test]
    async fn core_echo_roundtrip() {
        let server = StubServer::start(StubServer::echo_params).await;

        let echoed = server.client().core_echo(["ping"]).await.unwrap();
        assert_eq!(echoed, vec!["ping"]);

        let requests = server.requests();
        assert_eq!(requests[0].method, "core.echo");
        assert_eq!(requests[0].params, vec![json!("ping")]);
    }

    #[tokio::test]
    async fn core_echo_accepts_owned_strings() {
        let server = StubServer::start(StubServer::echo_params).await;

        let args = vec!["a".to_string(), "b".to_string()];
        let echoed = server.client().core_echo(args).await.unwrap();
        assert_eq!(echoed, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn uac_commands_report_ok() {
        let server = StubServer::start(StubServer::null_result).await;
        let client = server.client();

        assert_eq!(client.uac_reg_enable(["l_uuid", "gw1"]).await.unwrap(), "OK");
        assert_eq!(client.uac_reg_disable(["l_uuid", "gw1"]).await.unwrap(), "OK");
        assert_eq!(client.uac_reg_reload(Vec::<String>::new()).await.unwrap(), "OK");
        assert_eq!(client.uac_reg_refresh(["gw1"]).await.unwrap(), "OK");
        assert_eq!(client.domain_reload(Vec::<String>::new()).await.unwrap(), "OK");

        let methods: Vec<String> = server.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![
                "uac.reg_enable",
                "uac.reg_disable",
                "uac.reg_reload",
                "uac.reg_refresh",
                "domain.reload"
            ]
        );
    }

    #[tokio::test]
    async fn command_ignores_payload_shape() {
        let server = StubServer::start(respond(json!({"unexpected": [1, 2]}))).await;
        assert_eq!(server.client().domain_reload(["x"]).await.unwrap(), OK);
    }

    #[tokio::test]
    async fn command_propagates_protocol_error() {
        let server = StubServer::start(|req| {
            let body = json!({
                "jsonrpc": "2.0",
                "id": req.id,
                "error": {"code": 500, "message": "Error while enabling the record"}
            });
            (200, body.to_string())
        })
        .await;

        let err = server
            .client()
            .uac_reg_enable(["l_uuid", "missing"])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error while enabling the record");
    }

    #[tokio::test]
    async fn uac_reg_info_decodes() {
        let server = StubServer::start(respond(json!({
            "l_uuid": "gw1",
            "l_username": "100",
            "l_domain": "pbx.example.com",
            "r_username": "100",
            "r_domain": "carrier.example.net",
            "realm": "carrier.example.net",
            "auth_username": "100",
            "auth_password": "secret",
            "auth_proxy": "sip:carrier.example.net",
            "expires": 360,
            "flags": 20,
            "diff_expires": 120,
            "timer_expires": 1700000360
        })))
        .await;

        let info = server
            .client()
            .uac_reg_info(["l_uuid", "gw1"])
            .await
            .unwrap();
        assert_eq!(info.local_uuid, "gw1");
        assert_eq!(info.realm, "carrier.example.net");
        assert_eq!(info.diff_expires, 120);
    }

    #[tokio::test]
    async fn ul_dump_decodes() {
        let server = StubServer::start(respond(json!({
            "Domains": [{
                "Domain": {
                    "Domain": "location",
                    "Size": 1024,
                    "AoRs": [{
                        "Info": {
                            "AoR": "alice",
                            "HashID": 42,
                            "Contacts": [{"Contact": {"Address": "sip:alice@10.0.0.5", "Expires": 60}}]
                        }
                    }],
                    "Stats": {"Records": 1, "Max-Slots": 1}
                }
            }]
        })))
        .await;

        let dump = server.client().ul_dump(Vec::<String>::new()).await.unwrap();
        assert_eq!(dump.total_records(), 1);
        let alice = dump.find_aor("alice").unwrap();
        assert_eq!(alice.contacts[0].contact.address, "sip:alice@10.0.0.5");
    }

    #[tokio::test]
    async fn ul_lookup_decodes() {
        let server = StubServer::start(respond(json!({
            "AoR": "alice",
            "Contacts": [{"Contact": {"Address": "sip:alice@10.0.0.5", "Call-ID": "abc"}}]
        })))
        .await;

        let lookup = server
            .client()
            .ul_lookup(["location", "alice"])
            .await
            .unwrap();
        assert_eq!(lookup.aor, "alice");
        assert_eq!(lookup.contacts[0].contact.call_id, "abc");

        let requests = server.requests();
        assert_eq!(requests[0].method, "ul.lookup");
        assert_eq!(requests[0].params, vec![json!("location"), json!("alice")]);
    }

    #[tokio::test]
    async fn schema_mismatch_is_decode_error() {
        let server = StubServer::start(respond(json!({"AoR": 12}))).await;

        let err = server
            .client()
            .ul_lookup(["location", "alice"])
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Decode(ProtocolError::Decode(_))));
    }

    #[tokio::test]
    async fn echo_null_result_is_decode_error() {
        let server = StubServer::start(StubServer::null_result).await;

        let err = server.client().core_echo(["ping"]).await.unwrap_err();
        assert!(matches!(err, RpcError::Decode(_)));
    }

    #[tokio::test]
    async fn call_decoded_generic() {
        let server = StubServer::start(respond(json!({"version": "5.8.1"}))).await;

        let value: serde_json::Value = server
            .client()
            .call_decoded("core.version", Params::none())
            .await
            .unwrap();
        assert_eq!(value["version"], "5.8.1");
    }
}
