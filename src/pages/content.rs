//! Page-specific content fragments.

use crate::pages::document::Fragment;

pub const HOME: Fragment = Fragment::from_static(
    r#"      <div class="hero-section">
        <h1>Welcome to TechCorp</h1>
        <p class="hero-subtitle">Your trusted partner in digital transformation</p>
        <div class="hero-description">
          <p>We are a leading technology company specializing in innovative solutions that drive business growth and success. Our team of experts is dedicated to delivering cutting-edge technology services that meet your unique needs.</p>
          <div class="features-grid">
            <div class="feature-card">
              <h3>🚀 Innovation</h3>
              <p>Cutting-edge solutions for modern challenges</p>
            </div>
            <div class="feature-card">
              <h3>🛡️ Reliability</h3>
              <p>Trusted services with 99.9% uptime</p>
            </div>
            <div class="feature-card">
              <h3>🎯 Excellence</h3>
              <p>Quality results that exceed expectations</p>
            </div>
          </div>
        </div>
      </div>"#,
);

pub const SERVICES: Fragment = Fragment::from_static(
    r#"      <div class="page-header">
        <h1>Our Services</h1>
        <p class="page-subtitle">Comprehensive technology solutions for your business</p>
      </div>

      <div class="services-grid">
        <div class="service-card">
          <div class="service-icon">💻</div>
          <h3>Web Development</h3>
          <p>Custom web applications built with modern technologies and best practices. From simple websites to complex enterprise solutions.</p>
          <ul class="service-features">
            <li>Responsive Design</li>
            <li>Performance Optimization</li>
            <li>SEO Implementation</li>
          </ul>
        </div>

        <div class="service-card">
          <div class="service-icon">📱</div>
          <h3>Mobile Apps</h3>
          <p>Native and cross-platform mobile applications that deliver exceptional user experiences across iOS and Android platforms.</p>
          <ul class="service-features">
            <li>iOS & Android Development</li>
            <li>Cross-platform Solutions</li>
            <li>App Store Optimization</li>
          </ul>
        </div>

        <div class="service-card">
          <div class="service-icon">☁️</div>
          <h3>Cloud Solutions</h3>
          <p>Scalable cloud infrastructure and migration services to help your business leverage the power of cloud computing.</p>
          <ul class="service-features">
            <li>Cloud Migration</li>
            <li>Infrastructure Management</li>
            <li>Security & Compliance</li>
          </ul>
        </div>

        <div class="service-card">
          <div class="service-icon">🔒</div>
          <h3>Cybersecurity</h3>
          <p>Comprehensive security solutions to protect your digital assets and ensure business continuity in an ever-evolving threat landscape.</p>
          <ul class="service-features">
            <li>Security Audits</li>
            <li>Threat Detection</li>
            <li>Compliance Management</li>
          </ul>
        </div>
      </div>"#,
);

pub const CONTACT: Fragment = Fragment::from_static(
    r#"      <div class="page-header">
        <h1>Contact Us</h1>
        <p class="page-subtitle">Get in touch with our team of experts</p>
      </div>

      <div class="contact-content">
        <div class="contact-info">
          <div class="contact-card">
            <h3>📍 Office Location</h3>
            <p>123 Technology Street<br>
            Innovation District<br>
            Tech City, TC 12345</p>
          </div>

          <div class="contact-card">
            <h3>📞 Phone & Email</h3>
            <p>Phone: +1 (555) 123-4567<br>
            Email: info@techcorp.com<br>
            Support: support@techcorp.com</p>
          </div>

          <div class="contact-card">
            <h3>🕒 Business Hours</h3>
            <p>Monday - Friday<br>
            9:00 AM - 5:00 PM<br>
            Closed on weekends</p>
          </div>
        </div>

        <div class="contact-form-section">
          <h3>Send us a Message</h3>
          <form class="contact-form">
            <div class="form-group">
              <label for="name">Full Name</label>
              <input type="text" id="name" name="name" required>
            </div>

            <div class="form-group">
              <label for="email">Email Address</label>
              <input type="email" id="email" name="email" required>
            </div>

            <div class="form-group">
              <label for="subject">Subject</label>
              <input type="text" id="subject" name="subject" required>
            </div>

            <div class="form-group">
              <label for="message">Message</label>
              <textarea id="message" name="message" rows="5" required></textarea>
            </div>

            <button type="submit" class="submit-btn">Send Message</button>
          </form>
        </div>
      </div>"#,
);

pub const NOT_FOUND: Fragment = Fragment::from_static(
    r#"      <div class="error-page">
        <h1>404 - Page Not Found</h1>
        <p>The page you're looking for doesn't exist.</p>
        <a href="/" class="btn">Go Home</a>
      </div>"#,
);
