//! `<Prefix>EventDispatchers.mm`: one Objective-C++ class per domain, one method per event.
//!
//! Each method marshals its arguments into an `InspectorObject` keyed by parameter name and sends
//! `{"method": "<Domain>.<event>", "params": {...}}` through the controller's frontend channel. Optional
//! arguments arrive by pointer and are only written when non-null.

use inspector_model::{Domain, Event, Protocol};

use super::{
    is_valid_objc_identifier, objc_protocol_export_expression_for_variable, objc_type_for_param,
    should_generate_domain_event_dispatcher,
};
use crate::backend::config::GeneratorConfig;
use crate::backend::emitter::SourceEmitter;
use crate::backend::errors::EmitError;
use crate::backend::generator::{Generator, keyed_set_method_for_type, non_supplemental_domains, ucfirst};
use crate::backend::templates;

pub struct ObjCFrontendDispatcherImplementationGenerator<'a> {
    model: &'a Protocol,
    config: GeneratorConfig,
}

impl<'a> ObjCFrontendDispatcherImplementationGenerator<'a> {
    pub fn new(model: &'a Protocol, config: GeneratorConfig) -> Self {
        Self { model, config }
    }

    fn prefix(&self) -> &str {
        &self.config.objc_prefix
    }

    fn generate_event_dispatcher_implementations(&self, domain: &Domain) -> Result<String, EmitError> {
        if domain.events.is_empty() {
            return Ok(String::new());
        }
        check_identifier(domain, "domain name", &domain.name)?;

        let mut e = SourceEmitter::new();
        e.braced(
            &format!("@implementation {}{}DomainEventDispatcher", self.prefix(), domain.name),
            |e| e.line("AugmentableInspectorController* _controller;"),
        );
        e.blank_line();
        e.braced(
            "- (instancetype)initWithController:(AugmentableInspectorController*)controller;",
            |e| {
                e.line("self = [super init];");
                e.line("if (!self)");
                e.indented(|e| e.line("return nil;"));
                e.line("ASSERT(controller);");
                e.line("_controller = controller;");
                e.line("return self;");
            },
        );
        e.blank_line();
        for event in &domain.events {
            self.generate_event(&mut e, domain, event)?;
            e.blank_line();
        }
        e.line("@end");
        Ok(e.finish())
    }

    fn generate_event(&self, e: &mut SourceEmitter, domain: &Domain, event: &Event) -> Result<(), EmitError> {
        let signature = self.generate_event_signature(domain, event)?;
        e.braced(&signature, |e| {
            e.line("InspectorFrontendChannel* frontendChannel = _controller->frontendChannel();");
            e.line("if (!frontendChannel)");
            e.indented(|e| e.line("return;"));
            e.blank_line();
            e.line("RefPtr<InspectorObject> jsonMessage = InspectorObject::create();");
            e.linef(format_args!(
                "jsonMessage->setString(ASCIILiteral(\"method\"), ASCIILiteral(\"{}.{}\"));",
                domain.name, event.name
            ));
            if !event.parameters.is_empty() {
                generate_event_out_parameters(e, event);
            }
            e.line("frontendChannel->sendMessageToFrontend(jsonMessage->toJSONString());");
        });
        Ok(())
    }

    /// `- (void)event` or `- (void)eventWithFirst:(T)first second:(U)second`.
    fn generate_event_signature(&self, domain: &Domain, event: &Event) -> Result<String, EmitError> {
        check_identifier(domain, "event name", &event.name)?;
        if event.parameters.is_empty() {
            return Ok(format!("- (void){}", event.name));
        }

        let mut pairs = Vec::with_capacity(event.parameters.len());
        for parameter in &event.parameters {
            check_identifier(domain, &format!("parameter of `{}`", event.name), &parameter.name)?;
            let objc_type = objc_type_for_param(self.prefix(), &domain.name, &event.name, parameter);
            pairs.push(format!("{}:({objc_type}){}", parameter.name, parameter.name));
        }
        pairs[0] = ucfirst(&pairs[0]);
        Ok(format!("- (void){}With{}", event.name, pairs.join(" ")))
    }
}

fn generate_event_out_parameters(e: &mut SourceEmitter, event: &Event) {
    e.line("RefPtr<InspectorObject> paramsObject = InspectorObject::create();");
    for parameter in &event.parameters {
        let keyed_set_method = keyed_set_method_for_type(&parameter.ty);
        let safe_var_name = if parameter.is_optional {
            format!("(*{})", parameter.name)
        } else {
            parameter.name.clone()
        };
        let export_expression = objc_protocol_export_expression_for_variable(&parameter.ty, &safe_var_name);
        let set = format!(
            "paramsObject->{keyed_set_method}(ASCIILiteral(\"{}\"), {export_expression});",
            parameter.name
        );
        if parameter.is_optional {
            e.linef(format_args!("if ({})", parameter.name));
            e.indented(|e| e.line(&set));
        } else {
            e.line(&set);
        }
    }
    e.line("jsonMessage->setObject(ASCIILiteral(\"params\"), paramsObject);");
}

fn check_identifier(domain: &Domain, what: &str, name: &str) -> Result<(), EmitError> {
    if is_valid_objc_identifier(name) {
        return Ok(());
    }
    Err(EmitError::Unsupported {
        domain: domain.name.clone(),
        message: format!("{what} `{name}` is not a valid Objective-C identifier"),
    })
}

impl Generator for ObjCFrontendDispatcherImplementationGenerator<'_> {
    fn model(&self) -> &Protocol {
        self.model
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn output_filename(&self) -> String {
        format!("{}EventDispatchers.mm", self.prefix())
    }

    fn domains_to_generate(&self) -> Vec<&Domain> {
        non_supplemental_domains(self.model)
            .into_iter()
            .filter(|domain| {
                let generate = should_generate_domain_event_dispatcher(self.model, domain);
                if !generate {
                    tracing::debug!(domain = %domain.name, "skipping domain without an Objective-C event dispatcher");
                }
                generate
            })
            .collect()
    }

    fn generate_output(&self) -> Result<String, EmitError> {
        let prefix = self.prefix();
        let secondary_headers = [
            format!("\"{prefix}EnumConversionHelpers.h\""),
            "<JavaScriptCore/InspectorFrontendChannel.h>".to_string(),
            "<JavaScriptCore/InspectorValues.h>".to_string(),
        ];
        let primary_include = format!("\"{prefix}Internal.h\"");
        let secondary_includes = secondary_headers
            .iter()
            .map(|header| format!("#import {header}"))
            .collect::<Vec<_>>()
            .join("\n");
        let header_args = [
            ("primaryInclude", primary_include.as_str()),
            ("secondaryIncludes", secondary_includes.as_str()),
        ];

        let domains = self.domains_to_generate();
        let mut sections = Vec::with_capacity(domains.len() + 3);
        sections.push(self.generate_license()?);
        sections.push(templates::substitute(templates::OBJC_IMPLEMENTATION_PRELUDE, &header_args)?);
        for domain in &domains {
            sections.push(self.generate_event_dispatcher_implementations(domain)?);
        }
        sections.push(templates::substitute(templates::OBJC_IMPLEMENTATION_POSTLUDE, &header_args)?);

        tracing::debug!(
            file = %self.output_filename(),
            domains = domains.len(),
            "generated event dispatcher implementations"
        );
        Ok(sections.join("\n\n"))
    }
}
