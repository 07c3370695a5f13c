//! Prompt templates for each agent operation.
//!
//! The system prompt pins the hybrid output contract: one fenced JSON block
//! in a fixed shape, followed by free-form markdown reasoning. Downstream
//! parsing tolerates the model ignoring it, but generation quality depends on
//! the contract being spelled out here.

use std::fmt::Write;

use skyforge_tools::catalog;

const SYSTEM_PROMPT_HEADER: &str = r#"You are an expert cloud architecture AI agent specialized in AWS, Azure, and Google Cloud Platform.

Your role is to help users design optimal, secure, and cost-effective cloud architectures.

Key Responsibilities:
1. Analyze user requirements and recommend appropriate cloud services
2. Design complete architectures with proper service connections
3. Estimate costs accurately using the reference data below
4. Suggest cost optimizations and alternatives
5. Validate architectures for best practices and security
6. Provide clear reasoning for your recommendations

Guidelines:
- Use the service reference data for accurate costs
- Provide specific, actionable recommendations
- Consider security, scalability, and cost in all designs
- Explain trade-offs between different approaches
- Follow cloud best practices (high availability, disaster recovery, monitoring)

CRITICAL OUTPUT FORMAT:
You MUST return your response in this EXACT JSON structure, followed by detailed markdown reasoning:

```json
{
  "architecture": {
    "title": "Project Title",
    "description": "Brief project description",
    "provider": "aws|azure|gcp",
    "total_cost": 229.00,
    "services": [
      {
        "id": "service-1",
        "name": "EC2 Instance",
        "type": "compute",
        "cost": 29.20,
        "description": "Primary application server",
        "icon": "server",
        "position": {"x": 300, "y": 200}
      }
    ],
    "connections": [
      {"from": "service-1", "to": "service-2", "type": "HTTP/HTTPS"}
    ],
    "alternatives": [
      {
        "service_id": "service-1",
        "alternative_name": "EC2 t3.small",
        "cost": 14.60,
        "savings": 14.60,
        "performance": 70,
        "description": "Smaller instance size"
      }
    ]
  }
}
```

IMPORTANT NODE POSITIONING RULES:
- Space nodes FAR APART to prevent visual clutter and make connections clearly visible
- Minimum horizontal spacing between nodes: 400 pixels
- Minimum vertical spacing between nodes: 300 pixels
- Arrange nodes in logical layers (e.g., frontend at top, backend in middle, data at bottom)
- This generous spacing ensures connection lines are easily visible and the diagram remains readable

Then provide detailed markdown explanation with:
- Architecture overview
- Security best practices
- Cost breakdown
- Optimization recommendations
- Implementation steps"#;

/// The full system prompt, with the service cost reference appended.
pub fn system_prompt() -> String {
    let mut prompt = String::from(SYSTEM_PROMPT_HEADER);
    prompt.push_str("\n\nService cost reference (baseline USD/month):\n");
    for info in catalog::services() {
        let _ = writeln!(
            prompt,
            "- {} ({}): ${:.2}/mo - {}",
            info.name, info.category, info.cost, info.description
        );
    }
    prompt
}

/// Generation prompt for a formatted requirements block.
pub fn generate_architecture(requirements: &str) -> String {
    format!(
        "Design a cloud architecture based on these requirements:\n\n{}\n\n\
         Please:\n\
         1. Recommend specific cloud services with accurate costs\n\
         2. Calculate the total monthly cost\n\
         3. Suggest how services should connect\n\
         4. Validate the architecture against best practices\n\
         5. Provide security best practices\n\
         6. Suggest cost optimizations if possible\n\n\
         Be specific and provide a complete, production-ready architecture.",
        requirements
    )
}

/// Optimization prompt for an existing architecture description.
pub fn optimize_architecture(current_architecture: &str, optimization_goal: &str) -> String {
    format!(
        "Analyze and optimize this architecture with goal: {}\n\n\
         Current Architecture:\n{}\n\n\
         Please:\n\
         1. Identify optimization opportunities\n\
         2. Calculate potential savings\n\
         3. Suggest alternative services where beneficial\n\
         4. Maintain or improve performance\n\
         5. Ensure security is not compromised\n\
         6. Provide implementation steps\n\n\
         Focus on practical, high-impact optimizations.",
        optimization_goal, current_architecture
    )
}

/// Validation prompt for a submitted design.
pub fn validate_design(architecture_description: &str) -> String {
    format!(
        "Validate this cloud architecture design:\n\n{}\n\n\
         Provide:\n\
         1. Validation results\n\
         2. Security concerns\n\
         3. Scalability issues\n\
         4. Best practice violations\n\
         5. Recommended improvements\n\
         6. Priority of each issue",
        architecture_description
    )
}

/// Cross-provider comparison prompt for one service.
pub fn compare_providers(service_name: &str) -> String {
    format!(
        "Compare the service \"{}\" across AWS, Azure, and Google Cloud.\n\n\
         Provide:\n\
         1. Equivalent services in each cloud\n\
         2. Key feature differences\n\
         3. Cost comparison (if available)\n\
         4. When to choose each provider\n\
         5. Migration considerations",
        service_name
    )
}

/// Free-form question, with optional architecture context.
pub fn answer_question(question: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!(
            "Context: {}\n\nQuestion: {}\n\nProvide a clear, practical answer.",
            context, question
        ),
        None => question.to_string(),
    }
}

/// Infrastructure-as-code generation prompt.
pub fn generate_code(
    code_type: &str,
    provider: &str,
    architecture_name: &str,
    components_description: &str,
) -> String {
    format!(
        "Generate complete, production-ready {} code for this cloud architecture:\n\n\
         Provider: {}\n\
         Architecture: {}\n\n\
         Components:\n{}\n\n\
         Requirements:\n\
         - Include all necessary resources\n\
         - Add proper security configurations\n\
         - Include networking setup (VPC, subnets, security groups)\n\
         - Add resource tags for organization\n\
         - Include output variables for important endpoints\n\
         - Follow best practices for {}\n\
         - Keep the code concise and well-commented\n\n\
         Return ONLY the {} code, no additional explanation.",
        code_type.to_uppercase(),
        provider,
        architecture_name,
        components_description,
        provider,
        code_type
    )
}

/// Deployment-plan prompt for the simulated deploy flow.
pub fn plan_deployment(
    provider: &str,
    region: &str,
    stack_name: &str,
    architecture_name: &str,
    component_count: usize,
) -> String {
    format!(
        "Create a detailed deployment plan for the following architecture:\n\n\
         Provider: {}\n\
         Region: {}\n\
         Stack Name: {}\n\
         Architecture: {}\n\n\
         Components: {} resources\n\n\
         Generate a step-by-step deployment plan including:\n\
         1. Pre-deployment checks\n\
         2. Resource creation order\n\
         3. Configuration steps\n\
         4. Post-deployment validation\n\
         5. Estimated deployment time\n\n\
         Format as deployment logs with timestamps.",
        provider, region, stack_name, architecture_name, component_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_output_contract_and_catalog() {
        let prompt = system_prompt();
        assert!(prompt.contains("\"architecture\""));
        assert!(prompt.contains("```json"));
        assert!(prompt.contains("EC2 (compute): $29.20/mo"));
        assert!(prompt.contains("NODE POSITIONING RULES"));
    }

    #[test]
    fn question_without_context_passes_through() {
        assert_eq!(answer_question("Why VPC?", None), "Why VPC?");
    }

    #[test]
    fn question_with_context_is_prefixed() {
        let prompt = answer_question("Why VPC?", Some("Three-tier web app"));
        assert!(prompt.starts_with("Context: Three-tier web app"));
        assert!(prompt.contains("Question: Why VPC?"));
    }

    #[test]
    fn code_prompt_uppercases_the_code_type() {
        let prompt = generate_code("terraform", "aws", "Shop", "- EC2: app server");
        assert!(prompt.contains("TERRAFORM code"));
        assert!(prompt.ends_with("Return ONLY the terraform code, no additional explanation."));
    }
}
