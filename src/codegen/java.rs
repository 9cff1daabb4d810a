//! Java code generation using `java.net.http.HttpClient` (Java 11+).

use super::literal::json_string;
use super::Snippet;

/// Generates a Java program that builds and sends the request.
pub fn generate_java_code(snippet: &Snippet<'_>) -> String {
    let mut code = String::new();

    code.push_str("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n\n");
    code.push_str("public class RestClient {\n");
    code.push_str("    public static void main(String[] args) {\n");
    code.push_str("        HttpClient client = HttpClient.newHttpClient();\n\n");
    code.push_str("        HttpRequest.Builder requestBuilder = HttpRequest.newBuilder()\n");
    code.push_str(&format!(
        "            .uri(URI.create({}));\n",
        json_string(snippet.url)
    ));

    let mut builder_calls = Vec::new();
    for (key, value) in &snippet.headers {
        builder_calls.push(format!(
            "        requestBuilder.header({}, {});",
            json_string(key),
            json_string(value)
        ));
    }

    // The builder defaults to GET.
    match snippet.body {
        Some(body) => builder_calls.push(format!(
            "        requestBuilder.method({}, HttpRequest.BodyPublishers.ofString({}));",
            json_string(snippet.method),
            json_string(body)
        )),
        None if snippet.method != "GET" => builder_calls.push(format!(
            "        requestBuilder.method({}, HttpRequest.BodyPublishers.noBody());",
            json_string(snippet.method)
        )),
        None => {}
    }

    if !builder_calls.is_empty() {
        code.push('\n');
        code.push_str(&builder_calls.join("\n"));
        code.push('\n');
    }

    code.push_str("\n        HttpRequest request = requestBuilder.build();\n\n");
    code.push_str("        try {\n");
    code.push_str("            HttpResponse<String> response = client.send(request,\n");
    code.push_str("                HttpResponse.BodyHandlers.ofString());\n\n");
    code.push_str("            System.out.println(\"Status: \" + response.statusCode());\n");
    code.push_str("            System.out.println(\"Response: \" + response.body());\n");
    code.push_str("        } catch (Exception e) {\n");
    code.push_str("            e.printStackTrace();\n");
    code.push_str("        }\n");
    code.push_str("    }\n");
    code.push('}');

    code
}
